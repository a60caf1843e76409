//! Shared-data instancing model
//!
//! Copies of the source object differ only by transform: one immutable
//! data block is referenced by many lightweight pose-holding descriptors,
//! never N independent copies of the geometry. This is a hard requirement
//! of the placement contract, not an optimization.
//!
//! The host scene graph consumes this: it creates one object instance per
//! descriptor sharing the single data block, parents them all to an anchor
//! node named after the group identifier, applies each transform relative
//! to the anchor's origin, and honors the `locked` flag by disabling
//! direct transform edits on the instances (only the anchor stays
//! movable).
//!
//! Author: Moroya Sakamoto

use crate::placement::Placement;
use crate::types::SymOp;
use std::sync::Arc;

/// Lightweight per-copy record: owner index plus pose
#[derive(Debug, Clone, Copy)]
pub struct InstanceDescriptor {
    /// Copy index, matching the placement order
    pub index: u32,
    /// Pose of this copy about the shared center
    pub transform: SymOp,
    /// Whether the host must prevent direct pose edits on this copy
    pub locked: bool,
}

/// A set of instances sharing one immutable data block.
///
/// `T` is whatever the host treats as shareable object data (mesh, curve,
/// bone hierarchy, ...); the engine never inspects it.
#[derive(Debug, Clone)]
pub struct InstanceSet<T> {
    data: Arc<T>,
    anchor: String,
    instances: Vec<InstanceDescriptor>,
}

impl<T> InstanceSet<T> {
    /// Take ownership of a fresh data block and instance it per placement.
    pub fn new(data: T, placement: &Placement) -> Self {
        Self::from_shared(Arc::new(data), placement)
    }

    /// Reuse an existing shared data block verbatim ("symmetry group from
    /// object"): only what gets instantiated changes, not the transforms.
    pub fn from_shared(data: Arc<T>, placement: &Placement) -> Self {
        let instances = placement
            .placements
            .iter()
            .map(|pt| InstanceDescriptor {
                index: pt.index,
                transform: pt.transform,
                locked: placement.lock_transform,
            })
            .collect();
        InstanceSet {
            data,
            anchor: placement.identifier.anchor_name(),
            instances,
        }
    }

    /// The shared data block
    pub fn data(&self) -> &T {
        &self.data
    }

    /// A new handle to the shared data block (cheap; no copy of `T`)
    pub fn shared_data(&self) -> Arc<T> {
        Arc::clone(&self.data)
    }

    /// Name for the anchor node all copies are parented to
    pub fn anchor_name(&self) -> &str {
        &self.anchor
    }

    /// The per-copy descriptors
    pub fn instances(&self) -> &[InstanceDescriptor] {
        &self.instances
    }

    /// Number of copies
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether there are no copies
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
