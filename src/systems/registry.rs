//! Renderable <-> body pairing.
//!
//! An explicit bijection on stable ids, with hash lookups in both
//! directions (pick rays resolve body -> renderable, teleports resolve the
//! other way) and deterministic insertion-order iteration for the
//! per-frame sync.

use std::collections::HashMap;

use rapier3d::prelude::RigidBodyHandle;

use crate::core::error::SandboxError;

/// Stable identifier of a renderable proxy (its slot in the pool)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderableId(pub u32);

impl RenderableId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One-to-one association between renderables and simulation bodies.
///
/// Write-once: the pool is fixed for the sandbox's lifetime, so there is no
/// removal operation.
#[derive(Default)]
pub struct BodyRegistry {
    renderable_to_body: HashMap<RenderableId, RigidBodyHandle>,
    body_to_renderable: HashMap<RigidBodyHandle, RenderableId>,
    /// Insertion order, for deterministic iteration
    order: Vec<(RenderableId, RigidBodyHandle)>,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pairing. Fails without touching existing state if either
    /// side is already registered - that would mean the pool construction
    /// is broken.
    pub fn associate(
        &mut self,
        renderable: RenderableId,
        body: RigidBodyHandle,
    ) -> Result<(), SandboxError> {
        if self.renderable_to_body.contains_key(&renderable) {
            return Err(SandboxError::RenderableAlreadyRegistered(renderable));
        }
        if self.body_to_renderable.contains_key(&body) {
            return Err(SandboxError::BodyAlreadyRegistered);
        }
        self.renderable_to_body.insert(renderable, body);
        self.body_to_renderable.insert(body, renderable);
        self.order.push((renderable, body));
        Ok(())
    }

    pub fn find_body(&self, renderable: RenderableId) -> Option<RigidBodyHandle> {
        self.renderable_to_body.get(&renderable).copied()
    }

    pub fn find_renderable(&self, body: RigidBodyHandle) -> Option<RenderableId> {
        self.body_to_renderable.get(&body).copied()
    }

    /// Pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (RenderableId, RigidBodyHandle)> + '_ {
        self.order.iter().copied()
    }

    pub fn for_each(&self, mut visitor: impl FnMut(RenderableId, RigidBodyHandle)) {
        for (renderable, body) in &self.order {
            visitor(*renderable, *body);
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
