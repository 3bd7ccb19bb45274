use wasm_bindgen::prelude::*;

use crate::core::math::Vec3;
use crate::domain::config::SandboxConfig;
use crate::domain::view::{Camera, Viewport};
use crate::systems::picking::PickOutcome;

use super::SandboxCore;

/// Wasm-facing sandbox handle.
///
/// The host drives it with pointer/resize events and one `update` per
/// animation frame, then reads the transform and mask buffers back through
/// raw pointers into wasm memory (zero copy), or the typed-array views on
/// wasm targets.
#[wasm_bindgen]
pub struct Sandbox {
    core: SandboxCore,
}

#[wasm_bindgen]
impl Sandbox {
    /// Create a sandbox with the default ball-pit tuning
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Result<Sandbox, JsValue> {
        let core = SandboxCore::new(
            SandboxConfig::default(),
            Camera::default(),
            Viewport::new(viewport_width, viewport_height),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Create a sandbox from a (possibly partial) JSON config
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(
        json: &str,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Result<Sandbox, JsValue> {
        let config =
            SandboxConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let core = SandboxCore::new(
            config,
            Camera::default(),
            Viewport::new(viewport_width, viewport_height),
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { core })
    }

    /// Adopt the host camera: pick rays start at its position, the view
    /// mask is sized from its frustum bounds
    pub fn set_camera(&mut self, x: f32, y: f32, z: f32, left: f32, top: f32) {
        self.core.set_camera(Camera::new(Vec3::new(x, y, z), left, top));
    }

    /// Pointer-move event in CSS pixels. Returns true when a registered
    /// ball was struck and impulsed.
    pub fn on_pointer_move(&mut self, screen_x: f32, screen_y: f32) -> bool {
        matches!(
            self.core.on_pointer_move(screen_x, screen_y),
            PickOutcome::Struck { .. }
        )
    }

    /// Viewport resize; rebuilds the mask outline only
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.core.on_resize(width, height);
    }

    /// Step the simulation forward by `dt` seconds (call once per frame)
    pub fn update(&mut self, dt: f32) {
        self.core.update(dt);
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Simulated bodies, pool plus pointer probe
    pub fn body_count(&self) -> u32 {
        self.core.body_count() as u32
    }

    /// Registered (renderable, body) pairs; constant after construction
    pub fn registered_pairs(&self) -> u32 {
        self.core.registered_pairs() as u32
    }

    /// Get pointer to the flat transform buffer (for JS rendering)
    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms().as_ptr()
    }

    /// Transform buffer length in floats (8 per body)
    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    /// Get pointer to the mask outline points (flat x, y pairs)
    pub fn mask_points_ptr(&self) -> *const f32 {
        self.core.mask().points().as_ptr()
    }

    /// Mask outline length in floats
    pub fn mask_points_len(&self) -> usize {
        self.core.mask().points().len()
    }

    /// Echo the active config as JSON (debug/GUI panels)
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Drop the physics world; later updates become no-ops
    pub fn teardown(&mut self) {
        self.core.teardown();
    }

    /// Transform buffer as a typed-array copy
    #[cfg(target_arch = "wasm32")]
    pub fn transforms_view(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.transforms())
    }

    /// Mask outline as a typed-array copy
    #[cfg(target_arch = "wasm32")]
    pub fn mask_points_view(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.core.mask().points())
    }
}
