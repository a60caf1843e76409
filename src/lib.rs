//! # ALICE-Orbifold
//!
//! **A.L.I.C.E. - Adaptive Lightweight Implicit Compression Engine** family:
//! finite spherical symmetry groups from orbifold signatures.
//!
//! Generates the point-symmetry groups of the sphere - cyclic, dihedral,
//! tetrahedral, octahedral, icosahedral and their reflective extensions -
//! from a compact textual descriptor, and turns the group elements into an
//! ordered list of placement transforms for tiling a sphere with copies of
//! a fundamental tile (or for visualizing the symmetry axes).
//!
//! ## Features
//!
//! - **Signatures**: orbifold notation (`532`, `*432`, `2*6`, `4x`, ...)
//!   with presets for the common polyhedra
//! - **Generation**: closed element sets from per-family generators,
//!   saturated under composition with tolerance-based equality
//! - **Canonical ordering**: reproducible, diff-stable element sequences
//! - **Placements**: tile and axes modes, stable group identifiers,
//!   lock-transform pass-through
//! - **Instancing**: one shared data block, N lightweight pose descriptors
//! - **Batch**: parallel resolution of many signatures via rayon
//! - **File I/O**: JSON placement exchange with host applications
//!
//! ## Example
//!
//! ```rust
//! use alice_orbifold::prelude::*;
//!
//! // Symmetry group of an icosahedron
//! let group = symmetry_group("*532").unwrap();
//! assert_eq!(group.order(), 120);
//!
//! // Tile the sphere: one placement per group element
//! let placement = group.placements(Mode::Tile, true).unwrap();
//! assert_eq!(placement.placements.len(), 120);
//! assert_eq!(placement.identifier.to_string(), "*532");
//!
//! // Instance a shared mesh under an anchor named after the identifier
//! let instances = InstanceSet::new(group.tile(), &placement);
//! assert_eq!(instances.anchor_name(), "SymGrp *532");
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod batch;
pub mod domain;
pub mod engine;
pub mod error;
pub mod group;
pub mod instance;
pub mod io;
pub mod placement;
pub mod presets;
pub mod signature;
pub mod tile;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::batch::{build_batch, build_batch_parallel};
    pub use crate::domain::{resolve, CanonicalSequence};
    pub use crate::engine::{symmetry_group, SymmetryGroup};
    pub use crate::error::SymmetryError;
    pub use crate::group::{generate, ElementSet};
    pub use crate::instance::{InstanceDescriptor, InstanceSet};
    pub use crate::io::{from_json_string, load_placement, save_placement, to_json_string};
    pub use crate::placement::{build, GroupIdentifier, Placement, PlacementTransform};
    pub use crate::presets;
    pub use crate::signature::{parse, Signature, MAX_ORDER};
    pub use crate::tile::{fundamental_tile, TileMesh};
    pub use crate::types::{Embedding, Family, GroupSpec, Mode, SymOp, EPSILON};
    pub use glam::{DMat3, DQuat, DVec3};
}

// Re-exports for convenience
pub use engine::{symmetry_group, SymmetryGroup};
pub use error::SymmetryError;
pub use types::{GroupSpec, Mode, SymOp};
