//! Ballpit Engine - Interactive rigid-body ball sandbox in WASM
//!
//! The simulation core behind a pointer-driven "ball pit": a fixed pool of
//! dynamic spheres pulled toward a central attraction point, plus one
//! kinematic probe ball teleported to the pointer. Ray-cast picking turns
//! pointer motion into impulses on the struck ball.
//!
//! Architecture:
//! - core/        - Math types and the error taxonomy
//! - domain/      - Configuration, descriptors, renderable proxies
//! - systems/     - Physics wrapper, registry, attraction, picking
//! - simulation/  - Orchestration (SandboxCore) and the wasm facade
//!
//! Rendering stays on the host side: the facade exposes flat transform and
//! mask-outline buffers that a renderer reads back each frame.

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Ballpit WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::SandboxError;
pub use crate::core::math::{Quat, Vec3};
pub use domain::config::SandboxConfig;
pub use domain::view::{Camera, Viewport};
pub use simulation::{Sandbox, SandboxCore};
pub use systems::picking::PickOutcome;
