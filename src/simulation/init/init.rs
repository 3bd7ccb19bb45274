use crate::core::error::SandboxError;
use crate::core::math::Vec3;
use crate::domain::config::{BodyDescriptor, ColliderDescriptor, SandboxConfig};
use crate::domain::view::{Camera, Renderable, Viewport};
use crate::systems::attraction::AttractionField;
use crate::systems::physics::PhysicsWorld;
use crate::systems::picking::PointerPicker;
use crate::systems::registry::{BodyRegistry, RenderableId};

use super::{mask, random, render_extract, Phase, RenderBuffers, SandboxCore};

pub(super) fn create_sandbox_core(
    config: SandboxConfig,
    camera: Camera,
    viewport: Viewport,
) -> Result<SandboxCore, SandboxError> {
    config.validate()?;

    let mut world = PhysicsWorld::new();
    let mut registry = BodyRegistry::new();
    let mut renderables = Vec::with_capacity(config.object_count as usize + 1);

    // xorshift never leaves a zero state, so never seed one
    let mut rng_state = config.seed.max(1);

    let collider = ColliderDescriptor {
        radius: config.ball_radius,
        // The shipped scene sets mass equal to the ball radius
        mass: config.ball_radius,
        restitution: config.restitution,
    };

    for i in 0..config.object_count {
        let position = random::unit_sphere_dir(&mut rng_state) * config.spawn_radius;
        let handle = world.spawn_ball(
            &BodyDescriptor {
                kinematic: false,
                position,
                linear_damping: config.linear_damping,
            },
            &collider,
        );
        renderables.push(Renderable::new(position, config.ball_radius));
        registry.associate(RenderableId(i), handle)?;
    }

    // The pointer probe: kinematic (input-driven), registered like the rest
    // of the pool but exempt from attraction and invisible to pick rays.
    let probe = world.spawn_ball(
        &BodyDescriptor {
            kinematic: true,
            position: Vec3::zero(),
            linear_damping: config.linear_damping,
        },
        &collider,
    );
    renderables.push(Renderable::new(Vec3::zero(), config.ball_radius));
    registry.associate(RenderableId(config.object_count), probe)?;

    let mut render = RenderBuffers {
        transforms: Vec::with_capacity(renderables.len() * render_extract::FLOATS_PER_TRANSFORM),
    };
    render_extract::extract(&renderables, &mut render.transforms);

    Ok(SandboxCore {
        attraction: AttractionField::new(config.attraction_target(), config.attraction_force),
        picker: PointerPicker::new(
            config.pointer_world_scale,
            config.ray_max_distance,
            config.pointer_force_coef,
        ),
        mask: mask::build(&camera),
        config,
        camera,
        viewport,
        phase: Phase::Ready,
        world: Some(world),
        registry,
        renderables,
        pointer_body: Some(probe),
        render,
        frame: 0,
    })
}
