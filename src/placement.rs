//! Placement building
//!
//! Maps a canonical element sequence to a list of placement transforms
//! ready for instancing, and derives the stable identifier callers use as
//! an anchor name and cache key. The engine keeps no reference to the
//! output after returning it: either a full, valid placement list is
//! produced, or nothing is.
//!
//! Author: Moroya Sakamoto

use crate::domain::CanonicalSequence;
use crate::error::SymmetryError;
use crate::types::{Mode, SymOp, EPSILON};
use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// One copy placement: copy `index` of the tile (or axis) must be
/// transformed by `transform` about the shared center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlacementTransform {
    /// Copy index, matching the canonical element order
    pub index: u32,
    /// Rotation or rotation-reflection to apply
    pub transform: SymOp,
}

/// Normalized identifier derived from the resolved group specification.
///
/// Two signatures that resolve to the same specification share an
/// identifier even when the input strings differ; permutations that change
/// the embedding stay distinct. Also used as the anchor-node name and as a
/// memoization key across requests with the same effective symmetry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupIdentifier {
    signature: String,
    mode: Mode,
}

impl GroupIdentifier {
    fn new(signature: String, mode: Mode) -> Self {
        GroupIdentifier { signature, mode }
    }

    /// The canonical signature string
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The restriction this identifier was built under
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Name for the anchor node the host parents all copies to
    pub fn anchor_name(&self) -> String {
        format!("SymGrp {}", self.signature)
    }
}

impl std::fmt::Display for GroupIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mode {
            Mode::Tile => f.write_str(&self.signature),
            Mode::Axes => write!(f, "{}:axes", self.signature),
        }
    }
}

/// Output of the placement builder: the identifier plus the ordered
/// placement list. Owned by the caller after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    /// Stable identifier for the effective symmetry
    pub identifier: GroupIdentifier,
    /// Ordered placements, one per copy
    pub placements: Vec<PlacementTransform>,
    /// Pass-through flag: the host must prevent direct editing of per-copy
    /// pose after placement. Does not change the placements themselves.
    pub lock_transform: bool,
}

/// One representative per distinct rotation axis, deduplicating elements
/// that share an axis but differ only in rotation angle or improperness.
/// The identity contributes no axis. Each representative maps the +Z
/// reference direction onto the axis.
fn axis_representatives(sequence: &CanonicalSequence) -> Vec<PlacementTransform> {
    let mut axes: Vec<DVec3> = Vec::new();
    for op in sequence.iter() {
        if let Some(axis) = op.rotation_axis() {
            if !axes.iter().any(|a| (*a - axis).length() < EPSILON) {
                axes.push(axis);
            }
        }
    }
    axes.into_iter()
        .enumerate()
        .map(|(i, axis)| PlacementTransform {
            index: i as u32,
            transform: SymOp {
                matrix: DMat3::from_quat(DQuat::from_rotation_arc(DVec3::Z, axis)),
            },
        })
        .collect()
}

/// Build the placement list for a canonical sequence.
///
/// Tile mode emits one placement per group element; Axes mode restricts to
/// one per distinct rotation axis. Fails with
/// [`SymmetryError::EmptyGroup`] if the sequence is empty, which signals an
/// upstream generation defect (every group contains the identity).
pub fn build(
    sequence: &CanonicalSequence,
    mode: Mode,
    lock_transform: bool,
) -> Result<Placement, SymmetryError> {
    if sequence.is_empty() {
        return Err(SymmetryError::EmptyGroup);
    }
    let placements = match mode {
        Mode::Tile => sequence
            .iter()
            .enumerate()
            .map(|(i, op)| PlacementTransform {
                index: i as u32,
                transform: *op,
            })
            .collect(),
        Mode::Axes => axis_representatives(sequence),
    };
    Ok(Placement {
        identifier: GroupIdentifier::new(sequence.canonical_signature().to_string(), mode),
        placements,
        lock_transform,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::resolve;
    use crate::group::generate;
    use crate::signature;

    fn sequence(sig: &str) -> CanonicalSequence {
        resolve(&generate(&signature::parse(sig).unwrap()).unwrap())
    }

    fn tile(sig: &str) -> Placement {
        build(&sequence(sig), Mode::Tile, false).unwrap()
    }

    fn axes(sig: &str) -> Placement {
        build(&sequence(sig), Mode::Axes, false).unwrap()
    }

    #[test]
    fn test_trivial_signature_single_placement() {
        for sig in ["1", ""] {
            let p = tile(sig);
            assert_eq!(p.placements.len(), 1);
            assert_eq!(p.identifier.to_string(), "1");
        }
    }

    #[test]
    fn test_dihedral_222_has_four_placements() {
        assert_eq!(tile("222").placements.len(), 4);
    }

    #[test]
    fn test_star_two_has_two_reflections() {
        let p = tile("*2");
        assert_eq!(p.placements.len(), 4);
        let improper = p
            .placements
            .iter()
            .filter(|pt| pt.transform.is_improper())
            .count();
        assert_eq!(improper, 2);
    }

    #[test]
    fn test_placement_indices_are_sequential() {
        let p = tile("*432");
        for (i, pt) in p.placements.iter().enumerate() {
            assert_eq!(pt.index, i as u32);
        }
    }

    #[test]
    fn test_axes_counts() {
        // Three perpendicular half-turn axes
        assert_eq!(axes("222").placements.len(), 3);
        // A single principal axis
        assert_eq!(axes("44").placements.len(), 1);
        // Octahedral: 3 four-fold + 4 three-fold + 6 two-fold
        assert_eq!(axes("*432").placements.len(), 13);
        // Icosahedral: 6 five-fold + 10 three-fold + 15 two-fold
        assert_eq!(axes("532").placements.len(), 31);
    }

    #[test]
    fn test_axes_never_exceed_tile_count() {
        for sig in ["1", "*", "x", "44", "*44", "6*", "2*3", "3*2", "532", "*532"] {
            assert!(
                axes(sig).placements.len() <= tile(sig).placements.len(),
                "{}",
                sig
            );
        }
    }

    #[test]
    fn test_axes_representatives_are_proper() {
        for pt in &axes("*532").placements {
            assert!(!pt.transform.is_improper());
        }
    }

    #[test]
    fn test_identifier_stability_across_equivalent_signatures() {
        assert_eq!(tile("*2").identifier, tile("*22").identifier);
        assert_eq!(tile("").identifier, tile("1").identifier);
        assert_eq!(tile("5").identifier, tile("55").identifier);
    }

    #[test]
    fn test_identifier_distinguishes_embedding_permutations() {
        assert_ne!(tile("253").identifier, tile("532").identifier);
    }

    #[test]
    fn test_identifier_mode_restriction() {
        assert_ne!(tile("532").identifier, axes("532").identifier);
        assert_eq!(axes("532").identifier.to_string(), "532:axes");
        assert_eq!(tile("*432").identifier.anchor_name(), "SymGrp *432");
    }

    #[test]
    fn test_lock_transform_passes_through() {
        assert!(build(&sequence("44"), Mode::Tile, true).unwrap().lock_transform);
        assert!(!tile("44").lock_transform);
    }

    #[test]
    fn test_empty_sequence_is_a_defect() {
        let empty: CanonicalSequence = serde_json::from_str(
            r#"{"ops":[],"principal_axis":[0.0,0.0,1.0],"canonical_signature":"1"}"#,
        )
        .unwrap();
        assert!(matches!(
            build(&empty, Mode::Tile, false),
            Err(SymmetryError::EmptyGroup)
        ));
    }
}
