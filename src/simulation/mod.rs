//! Sandbox orchestration.
//!
//! `SandboxCore` owns the object pool and wires the pieces together; the
//! actual work lives in the step/input/init submodules. The wasm-facing
//! surface is the `Sandbox` facade.

use rapier3d::prelude::RigidBodyHandle;

use crate::core::error::SandboxError;
use crate::domain::config::SandboxConfig;
use crate::domain::view::{Camera, Renderable, Viewport};
use crate::systems::attraction::AttractionField;
use crate::systems::physics::PhysicsWorld;
use crate::systems::picking::{PickOutcome, PointerPicker};
use crate::systems::registry::{BodyRegistry, RenderableId};

#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
#[path = "input/input.rs"]
mod input;
#[path = "mask/mask.rs"]
mod mask;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Sandbox;
pub use mask::MaskGeometry;
pub use render_extract::FLOATS_PER_TRANSFORM;

/// Lifecycle of the sandbox.
///
/// `Uninitialized` means the physics world is absent (before construction
/// finishes, or after teardown); ticks in that state are a no-op, never an
/// error. `Ready` is entered once the pool and the mask are built; each
/// tick passes through `Stepping` and settles in `Idle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Ready,
    Idle,
    Stepping,
}

pub(crate) struct RenderBuffers {
    pub(crate) transforms: Vec<f32>,
}

/// The sandbox: a fixed pool of dynamic balls plus one kinematic pointer
/// probe, stepped once per frame and mirrored into renderable proxies.
pub struct SandboxCore {
    config: SandboxConfig,
    camera: Camera,
    viewport: Viewport,
    phase: Phase,
    world: Option<PhysicsWorld>,
    registry: BodyRegistry,
    renderables: Vec<Renderable>,
    pointer_body: Option<RigidBodyHandle>,
    picker: PointerPicker,
    attraction: AttractionField,
    mask: MaskGeometry,
    render: RenderBuffers,
    frame: u64,
}

impl SandboxCore {
    /// Build the pool: `object_count` dynamic balls on the spawn shell plus
    /// the kinematic pointer probe, all registered, mask geometry ready.
    pub fn new(
        config: SandboxConfig,
        camera: Camera,
        viewport: Viewport,
    ) -> Result<Self, SandboxError> {
        init::create_sandbox_core(config, camera, viewport)
    }

    /// One frame: step physics once, re-apply the attraction force to every
    /// dynamic ball, then copy body transforms into the renderables.
    pub fn update(&mut self, dt: f32) {
        step::update(self, dt);
    }

    /// Pointer-move event: teleport the probe to the pointer plane, then
    /// run the pick ray and apply the drag impulse on a hit.
    pub fn on_pointer_move(&mut self, screen_x: f32, screen_y: f32) -> PickOutcome {
        input::on_pointer_move(self, screen_x, screen_y)
    }

    /// Viewport resize rebuilds only the cosmetic view mask
    pub fn on_resize(&mut self, width: f32, height: f32) {
        input::on_resize(self, width, height);
    }

    /// Swap in a new host camera and re-derive the mask from its frustum
    pub fn set_camera(&mut self, camera: Camera) {
        input::set_camera(self, camera);
    }

    /// Drop the physics world; subsequent ticks become no-ops
    pub fn teardown(&mut self) {
        input::teardown(self);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Simulated bodies, pool plus probe
    pub fn body_count(&self) -> usize {
        self.world.as_ref().map(PhysicsWorld::body_count).unwrap_or(0)
    }

    /// Registered (renderable, body) pairs; `object_count + 1` for the
    /// sandbox's whole lifetime
    pub fn registered_pairs(&self) -> usize {
        self.registry.len()
    }

    pub fn renderables(&self) -> &[Renderable] {
        &self.renderables
    }

    /// Registry id of the kinematic pointer probe
    pub fn pointer_renderable(&self) -> Option<RenderableId> {
        let probe = self.pointer_body?;
        self.registry.find_renderable(probe)
    }

    /// Flat transform buffer, [`FLOATS_PER_TRANSFORM`] floats per entry in
    /// registration order
    pub fn transforms(&self) -> &[f32] {
        &self.render.transforms
    }

    pub fn mask(&self) -> &MaskGeometry {
        &self.mask
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
