use super::{render_extract, Phase, SandboxCore};

/// One external tick.
///
/// The physics provider is stepped exactly once; it sub-steps internally as
/// needed. Afterward every dynamic registered ball gets its attraction
/// force re-applied (forces reset first, so the pull never accumulates) and
/// every renderable mirrors its body's post-step transform.
///
/// A tick with no physics world (before construction completes, or after
/// teardown) is a deliberate no-op.
pub(super) fn update(core: &mut SandboxCore, dt: f32) {
    let Some(world) = core.world.as_mut() else {
        return;
    };
    core.phase = Phase::Stepping;

    world.step(dt);

    for (renderable, body) in core.registry.iter() {
        let Some(position) = world.translation(body) else {
            continue;
        };

        // Kinematic bodies (the pointer probe) are exempt from attraction
        if world.is_dynamic(body) {
            let force = core.attraction.force_on(position);
            world.set_force(body, force, true);
        }

        if let Some(proxy) = core.renderables.get_mut(renderable.index()) {
            proxy.position = position;
            if let Some(rotation) = world.rotation(body) {
                proxy.rotation = rotation;
            }
        }
    }

    render_extract::extract(&core.renderables, &mut core.render.transforms);

    core.frame += 1;
    core.phase = Phase::Idle;
}
