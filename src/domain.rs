//! Canonical ordering of group elements
//!
//! Reduces an [`ElementSet`] to a strict total order so output is
//! reproducible and diff-stable across invocations: primarily by twist
//! angle about the principal axis (ascending), secondarily proper before
//! improper, with ties broken by quantized lexicographic comparison of the
//! matrix entries (larger entries first, which puts the identity at index
//! 0). Index 0 is the orientation of the un-transformed source tile; every
//! other copy is obtained by applying its element relative to it.
//!
//! Author: Moroya Sakamoto

use crate::group::ElementSet;
use crate::types::{quantize, SymOp};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An [`ElementSet`] in canonical order. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalSequence {
    ops: Vec<SymOp>,
    principal_axis: DVec3,
    canonical_signature: String,
}

/// Sort key: (quantized twist angle, improperness, entries largest-first)
fn sort_key(op: &SymOp, principal_axis: DVec3) -> (i64, u8, [i64; 9]) {
    let twist = quantize(op.twist_angle(principal_axis));
    let improper = u8::from(op.is_improper());
    let mut entries = op.quantized_entries();
    for e in &mut entries {
        *e = -*e;
    }
    (twist, improper, entries)
}

/// Order the elements of a generated set canonically.
///
/// A deterministic sort over data already validated by generation; there
/// are no error conditions.
pub fn resolve(elements: &ElementSet) -> CanonicalSequence {
    let axis = elements.principal_axis();
    let mut ops = elements.ops().to_vec();
    ops.sort_by_key(|op| sort_key(op, axis));
    CanonicalSequence {
        ops,
        principal_axis: axis,
        canonical_signature: elements.canonical_signature().to_string(),
    }
}

impl CanonicalSequence {
    /// Number of elements
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The ordered elements
    pub fn ops(&self) -> &[SymOp] {
        &self.ops
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, SymOp> {
        self.ops.iter()
    }

    /// Element at `index`
    pub fn get(&self, index: usize) -> Option<&SymOp> {
        self.ops.get(index)
    }

    /// Principal axis used for the angle ordering
    pub fn principal_axis(&self) -> DVec3 {
        self.principal_axis
    }

    /// Canonical signature of the originating spec
    pub fn canonical_signature(&self) -> &str {
        &self.canonical_signature
    }
}
