use thiserror::Error;

use crate::systems::registry::RenderableId;

/// Failures surfaced by the sandbox core.
///
/// Registry conflicts indicate a pool-construction bug and are reported to
/// the caller. Everything else in the core (ray-cast misses, ticks before
/// the physics world exists) is absorbed as a benign no-op and never shows
/// up here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SandboxError {
    #[error("renderable {0:?} is already paired with a body")]
    RenderableAlreadyRegistered(RenderableId),

    #[error("body is already paired with a renderable")]
    BodyAlreadyRegistered,

    #[error("invalid sandbox config: {0}")]
    InvalidConfig(String),
}
