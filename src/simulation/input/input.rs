use crate::domain::view::{Camera, Viewport};
use crate::systems::picking::PickOutcome;

use super::{mask, Phase, SandboxCore};

/// Pointer-move: teleport the kinematic probe onto the pointer plane
/// (kinematic bodies move by direct translation, not forces), mirror it
/// into its renderable immediately, then let the picker cast the drag ray.
pub(super) fn on_pointer_move(
    core: &mut SandboxCore,
    screen_x: f32,
    screen_y: f32,
) -> PickOutcome {
    let Some(world) = core.world.as_mut() else {
        return PickOutcome::Miss;
    };

    let target = core.picker.world_target(screen_x, screen_y, &core.viewport);
    if let Some(probe) = core.pointer_body {
        world.set_translation(probe, target, true);
        if let Some(id) = core.registry.find_renderable(probe) {
            if let Some(proxy) = core.renderables.get_mut(id.index()) {
                proxy.position = target;
            }
        }
    }

    let mv = core.picker.on_pointer_move(
        screen_x,
        screen_y,
        &core.viewport,
        &core.camera,
        world,
        &core.registry,
        core.pointer_body,
    );
    mv.outcome
}

/// Resize only touches the cosmetic mask; the simulation is unaffected
pub(super) fn on_resize(core: &mut SandboxCore, width: f32, height: f32) {
    core.viewport = Viewport::new(width, height);
    core.mask = mask::build(&core.camera);
}

pub(super) fn set_camera(core: &mut SandboxCore, camera: Camera) {
    core.camera = camera;
    core.mask = mask::build(&core.camera);
}

/// Drop the physics world. The only other teardown the host needs is
/// removing its own event listeners.
pub(super) fn teardown(core: &mut SandboxCore) {
    core.world = None;
    core.pointer_body = None;
    core.phase = Phase::Uninitialized;
}
