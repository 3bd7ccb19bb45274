//! Pointer-to-world picking.
//!
//! Screen coordinates are normalized to NDC, mapped onto the z = 0 pointer
//! plane by a fixed scale, and turned into a camera-origin ray. The closest
//! struck ball receives an impulse proportional to the pointer's motion
//! since the previous event.

use rapier3d::prelude::RigidBodyHandle;

use crate::core::math::Vec3;
use crate::domain::view::{Camera, Viewport};
use crate::systems::physics::PhysicsWorld;
use crate::systems::registry::{BodyRegistry, RenderableId};

/// What a pointer-move did to the simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PickOutcome {
    /// Ray hit nothing
    Miss,
    /// Ray hit a collider with no registry entry (mask geometry etc.)
    Ignored,
    /// Ray hit a registered ball and the impulse was applied
    Struck { renderable: RenderableId },
}

/// Result of one pointer-move event
#[derive(Clone, Copy, Debug)]
pub struct PointerMove {
    /// Pointer position mapped onto the z = 0 plane
    pub world_pos: Vec3,
    /// Motion since the previous event
    pub delta: Vec3,
    pub outcome: PickOutcome,
}

pub struct PointerPicker {
    /// Previous pointer world position. Starts at the origin, so the first
    /// event measures its delta against (0, 0, 0).
    last_world_pos: Vec3,
    world_scale: f32,
    max_ray_distance: f32,
    force_coef: f32,
}

impl PointerPicker {
    pub fn new(world_scale: f32, max_ray_distance: f32, force_coef: f32) -> Self {
        Self {
            last_world_pos: Vec3::zero(),
            world_scale,
            max_ray_distance,
            force_coef,
        }
    }

    /// Map screen pixels to the z = 0 pointer plane.
    ///
    /// NDC convention: x and y in [-1, 1], y inverted relative to screen
    /// space, then scaled by the fixed world factor.
    pub fn world_target(&self, screen_x: f32, screen_y: f32, viewport: &Viewport) -> Vec3 {
        let ndc_x = (screen_x / viewport.width) * 2.0 - 1.0;
        let ndc_y = -(screen_y / viewport.height) * 2.0 + 1.0;
        Vec3::new(ndc_x * self.world_scale, ndc_y * self.world_scale, 0.0)
    }

    /// Process one pointer-move: update the delta state, cast a pick ray
    /// from the camera through the pointer plane and, on a registered hit,
    /// apply `delta * force_coef` at the hit point (waking the body).
    ///
    /// `exclude` is the kinematic probe ball, which must not catch the rays
    /// that are aimed straight at it. A zero delta applies a zero impulse.
    pub fn on_pointer_move(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        viewport: &Viewport,
        camera: &Camera,
        physics: &mut PhysicsWorld,
        registry: &BodyRegistry,
        exclude: Option<RigidBodyHandle>,
    ) -> PointerMove {
        let world_pos = self.world_target(screen_x, screen_y, viewport);
        let delta = world_pos - self.last_world_pos;
        self.last_world_pos = world_pos;

        let ray_dir = world_pos - camera.position;
        let outcome = match physics.cast_ray(
            camera.position,
            ray_dir,
            self.max_ray_distance,
            true,
            exclude,
        ) {
            None => PickOutcome::Miss,
            Some(hit) => match registry.find_renderable(hit.body) {
                // Colliders outside the pool are a benign miss
                None => PickOutcome::Ignored,
                Some(renderable) => {
                    physics.apply_impulse_at_point(
                        hit.body,
                        delta * self.force_coef,
                        hit.point,
                        true,
                    );
                    PickOutcome::Struck { renderable }
                }
            },
        };

        PointerMove {
            world_pos,
            delta,
            outcome,
        }
    }
}
