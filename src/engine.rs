//! Pipeline container
//!
//! Runs Parse -> Generate -> Resolve once and holds the results for
//! querying. A pure, synchronous computation with no internal concurrency:
//! all structures are request-local and immutable after creation, so
//! concurrent calls with different inputs are independent. Callers may
//! memoize a [`SymmetryGroup`] keyed by its identifier as a pure
//! performance optimization.
//!
//! Author: Moroya Sakamoto

use crate::domain::{self, CanonicalSequence};
use crate::error::SymmetryError;
use crate::group::{self, ElementSet};
use crate::placement::{self, Placement};
use crate::signature;
use crate::tile::{self, TileMesh};
use crate::types::{GroupSpec, Mode};
use serde::{Deserialize, Serialize};

/// A fully resolved spherical symmetry group.
///
/// ```
/// use alice_orbifold::prelude::*;
///
/// // Symmetry group of a cube
/// let group = SymmetryGroup::from_signature("*432").unwrap();
/// assert_eq!(group.order(), 48);
///
/// let placement = group.placements(Mode::Tile, true).unwrap();
/// assert_eq!(placement.placements.len(), 48);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymmetryGroup {
    spec: GroupSpec,
    elements: ElementSet,
    sequence: CanonicalSequence,
}

impl SymmetryGroup {
    /// Resolve an orbifold signature into a ready-to-query group.
    pub fn from_signature(signature_text: &str) -> Result<Self, SymmetryError> {
        let spec = signature::parse(signature_text)?;
        Self::from_spec(spec)
    }

    /// Build from an already resolved specification.
    pub fn from_spec(spec: GroupSpec) -> Result<Self, SymmetryError> {
        let elements = group::generate(&spec)?;
        let sequence = domain::resolve(&elements);
        Ok(SymmetryGroup {
            spec,
            elements,
            sequence,
        })
    }

    /// The resolved specification
    pub fn spec(&self) -> &GroupSpec {
        &self.spec
    }

    /// Number of symmetries in the group
    pub fn order(&self) -> usize {
        self.elements.len()
    }

    /// The closed element set, in generation order
    pub fn elements(&self) -> &ElementSet {
        &self.elements
    }

    /// The elements in canonical order
    pub fn sequence(&self) -> &CanonicalSequence {
        &self.sequence
    }

    /// Canonical signature of the resolved specification
    pub fn canonical_signature(&self) -> String {
        self.spec.canonical_signature()
    }

    /// Build the placement list for a mode.
    pub fn placements(&self, mode: Mode, lock_transform: bool) -> Result<Placement, SymmetryError> {
        placement::build(&self.sequence, mode, lock_transform)
    }

    /// The fundamental tile for this group
    pub fn tile(&self) -> TileMesh {
        tile::fundamental_tile(&self.spec)
    }
}

/// One-call convenience: signature in, resolved group out.
pub fn symmetry_group(signature_text: &str) -> Result<SymmetryGroup, SymmetryError> {
    SymmetryGroup::from_signature(signature_text)
}
