//! Group element generation
//!
//! Expands a [`GroupSpec`] into the finite, closed set of orthogonal
//! transforms forming that group. Each embedding has a small known
//! generator set (for the triangle groups, rotations at the vertices of a
//! spherical triangle solved from the law of cosines for angles); the set
//! is then saturated under composition until a full pass produces no new
//! element.
//!
//! Elements are deduplicated with the tolerance-based equality of
//! [`SymOp::approx_eq`]: repeated floating-point composition of
//! irrational-angle rotations never produces bit-exact repeats. Generation
//! is deterministic for a fixed spec; the resulting set is always the same
//! within [`EPSILON`].
//!
//! Author: Moroya Sakamoto

use crate::error::SymmetryError;
use crate::types::{Embedding, GroupSpec, SymOp, EPSILON};
use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// The finite set of unique transforms closed under composition, plus the
/// embedding context the downstream stages need.
///
/// Invariant: the number of elements equals the theoretical order of the
/// family (e.g. 24 for T_d, 48 for O_h, 120 for I_h).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSet {
    ops: Vec<SymOp>,
    principal_axis: DVec3,
    canonical_signature: String,
}

impl ElementSet {
    /// Number of group elements
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the set is empty (never true for a valid generation)
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// The elements, in generation order
    pub fn ops(&self) -> &[SymOp] {
        &self.ops
    }

    /// Iterate over the elements
    pub fn iter(&self) -> std::slice::Iter<'_, SymOp> {
        self.ops.iter()
    }

    /// Tolerance-based membership test
    pub fn contains(&self, op: &SymOp) -> bool {
        self.ops.iter().any(|k| k.approx_eq(op, EPSILON))
    }

    /// Number of proper (det +1) elements
    pub fn proper_count(&self) -> usize {
        self.ops.iter().filter(|o| !o.is_improper()).count()
    }

    /// Number of improper (det -1) elements
    pub fn improper_count(&self) -> usize {
        self.ops.iter().filter(|o| o.is_improper()).count()
    }

    /// Principal axis of the embedding that generated this set
    pub fn principal_axis(&self) -> DVec3 {
        self.principal_axis
    }

    /// Canonical signature of the spec that generated this set
    pub fn canonical_signature(&self) -> &str {
        &self.canonical_signature
    }
}

/// Side length of a spherical triangle from its three angles.
///
/// Law of cosines for angles: the side opposite `c` for a triangle with
/// angles `a`, `b`, `c` is `acos((cos c + cos a cos b) / (sin a sin b))`.
fn side_from_angles(a: f64, b: f64, c: f64) -> f64 {
    ((c.cos() + a.cos() * b.cos()) / (a.sin() * b.sin())).acos()
}

/// Vertices of the spherical triangle with angles `pi/m`, `pi/n`, `pi/p`.
///
/// The first vertex sits at the north pole, the second tilts toward +X (so
/// the pa-pb side lies in the XZ plane, which becomes the mirror for the
/// kaleidoscopic groups), and the third is placed by rotating the pole
/// about an axis turned out of the XZ plane by the apex angle.
pub(crate) fn triangle_vertices(m: u32, n: u32, p: u32) -> (DVec3, DVec3, DVec3) {
    let a = PI / f64::from(m);
    let b = PI / f64::from(n);
    let c = PI / f64::from(p);

    let side_ab = side_from_angles(a, b, c);
    let side_ac = side_from_angles(c, a, b);

    let pa = DVec3::Z;
    let pb = DQuat::from_axis_angle(DVec3::Y, side_ab) * pa;
    let v = DQuat::from_axis_angle(DVec3::Z, a) * DVec3::Y;
    let pc = DQuat::from_axis_angle(v, side_ac) * pa;
    (pa, pb, pc)
}

/// The order-3 axis of the pyritohedral group: the vertex of the
/// (4, 2, 3) spherical triangle opposite the pole.
pub(crate) fn pyritohedral_apex() -> DVec3 {
    let (a, b, c) = (PI / 4.0, PI / 2.0, PI / 3.0);
    let side = side_from_angles(c, a, b);
    let v = DQuat::from_axis_angle(DVec3::Z, a) * DVec3::Y;
    DQuat::from_axis_angle(v, side) * DVec3::Z
}

/// Generator set for an embedding: proper rotations, plus one improper
/// generator where the signature demands inverse symmetries.
///
/// Improper elements are uniformly "rotation composed with the XZ mirror";
/// all embeddings are oriented so the XZ plane is a mirror whenever the
/// group has any. The rotoreflection case offsets the mirror by half a
/// rotation step instead, and `x` alone degenerates to the central
/// inversion.
fn generators(spec: &GroupSpec) -> Vec<SymOp> {
    let mirror = SymOp::mirror_xz();
    match &spec.embedding {
        Embedding::Trivial => Vec::new(),
        Embedding::MirrorOnly => vec![mirror],
        Embedding::Cyclic { n } => vec![SymOp::rotation(DVec3::Z, TAU / f64::from(*n))],
        Embedding::Kaleido { n } => {
            vec![SymOp::rotation(DVec3::Z, TAU / f64::from(*n)), mirror]
        }
        Embedding::HorizontalMirror { n } => {
            vec![SymOp::rotation(DVec3::Y, TAU / f64::from(*n)), mirror]
        }
        Embedding::Rotoreflection { n } => {
            let step = SymOp::rotation(DVec3::Y, TAU / f64::from(*n));
            let roto = SymOp::rotation(DVec3::Y, PI / f64::from(*n)).compose(&mirror);
            vec![step, roto]
        }
        Embedding::Antiprismatic { n } => {
            let half = PI / (2.0 * f64::from(*n));
            let pc = DQuat::from_axis_angle(DVec3::X, half) * DVec3::Z;
            vec![
                SymOp::rotation(DVec3::X, TAU / f64::from(*n)),
                SymOp::rotation(pc, PI),
                mirror,
            ]
        }
        Embedding::Pyritohedral => {
            vec![
                SymOp::rotation(pyritohedral_apex(), TAU / 3.0),
                SymOp::rotation(DVec3::Z, PI),
                mirror,
            ]
        }
        Embedding::Triangle { orders, mirrored } => {
            let [m, n, p] = *orders;
            let (pa, pb, pc) = triangle_vertices(m, n, p);
            let mut gens = vec![
                SymOp::rotation(pa, TAU / f64::from(m)),
                SymOp::rotation(pb, TAU / f64::from(n)),
                SymOp::rotation(pc, TAU / f64::from(p)),
            ];
            if *mirrored {
                gens.push(mirror);
            }
            gens
        }
    }
}

/// Saturate a generator set under composition.
///
/// Breadth-first over the Cayley graph: compose every frontier element with
/// every generator, keep the tolerance-new results, stop when a pass adds
/// nothing or the known group order is reached. Group orders are small
/// (at most 120 for the polyhedral families), so this converges in a
/// handful of passes.
fn saturate(generators: &[SymOp], bound: usize) -> Vec<SymOp> {
    let mut group = vec![SymOp::IDENTITY];
    let mut frontier = vec![SymOp::IDENTITY];
    'grow: while !frontier.is_empty() {
        let mut fresh = Vec::new();
        for g in &frontier {
            for gen in generators {
                let h = g.compose(gen);
                if !group.iter().any(|k| k.approx_eq(&h, EPSILON)) {
                    group.push(h);
                    fresh.push(h);
                    if group.len() == bound {
                        break 'grow;
                    }
                }
            }
        }
        frontier = fresh;
    }
    group
}

/// Generate the closed element set for a group specification.
///
/// Fails with [`SymmetryError::UnsupportedFamily`] when the spec's family
/// tag does not agree with its embedding (unreachable through the parser,
/// reachable for hand-built or deserialized specs).
pub fn generate(spec: &GroupSpec) -> Result<ElementSet, SymmetryError> {
    match GroupSpec::family_of(&spec.embedding) {
        Some(family) if family == spec.family => {}
        Some(family) => {
            return Err(SymmetryError::UnsupportedFamily {
                detail: format!(
                    "family tag {:?} does not match embedding family {:?}",
                    spec.family, family
                ),
            })
        }
        None => {
            return Err(SymmetryError::UnsupportedFamily {
                detail: "embedding does not name a finite spherical group".to_string(),
            })
        }
    }

    let gens = generators(spec);
    let ops = saturate(&gens, spec.expected_order());
    debug_assert_eq!(ops.len(), spec.expected_order());

    Ok(ElementSet {
        ops,
        principal_axis: spec.principal_axis(),
        canonical_signature: spec.canonical_signature(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature;
    use crate::types::Family;

    fn elements(sig: &str) -> ElementSet {
        generate(&signature::parse(sig).unwrap()).unwrap()
    }

    #[test]
    fn test_trivial_group_is_identity_only() {
        let set = elements("1");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&SymOp::IDENTITY));
    }

    #[test]
    fn test_single_mirror_and_inversion() {
        let mirror = elements("*");
        assert_eq!(mirror.len(), 2);
        assert!(mirror.contains(&SymOp::mirror_xz()));

        let inversion = elements("x");
        assert_eq!(inversion.len(), 2);
        assert!(inversion.contains(&SymOp::inversion()));
    }

    #[test]
    fn test_cyclic_and_reflective_cyclic_orders() {
        assert_eq!(elements("55").len(), 5);
        assert_eq!(elements("*4").len(), 8);
        assert_eq!(elements("6*").len(), 12);
        assert_eq!(elements("6x").len(), 12);
        assert_eq!(elements("2*3").len(), 12);
    }

    #[test]
    fn test_polyhedral_orders() {
        assert_eq!(elements("332").len(), 12);
        assert_eq!(elements("*332").len(), 24);
        assert_eq!(elements("3*2").len(), 24);
        assert_eq!(elements("432").len(), 24);
        assert_eq!(elements("*432").len(), 48);
        assert_eq!(elements("532").len(), 60);
        assert_eq!(elements("*532").len(), 120);
    }

    #[test]
    fn test_identity_always_present() {
        for sig in ["1", "*", "x", "33", "2*4", "532"] {
            assert!(elements(sig).contains(&SymOp::IDENTITY), "{}", sig);
        }
    }

    #[test]
    fn test_rotation_groups_are_all_proper() {
        let set = elements("532");
        assert_eq!(set.proper_count(), 60);
        assert_eq!(set.improper_count(), 0);
    }

    #[test]
    fn test_full_icosahedral_split() {
        let set = elements("*532");
        assert_eq!(set.proper_count(), 60);
        assert_eq!(set.improper_count(), 60);
    }

    #[test]
    fn test_closure_under_composition() {
        let set = elements("*432");
        for a in set.iter() {
            for b in set.iter() {
                assert!(set.contains(&a.compose(b)));
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = elements("532");
        let b = elements("532");
        assert_eq!(a.len(), b.len());
        for op in a.iter() {
            assert!(b.contains(op));
        }
    }

    #[test]
    fn test_pyritohedral_contains_inversion_but_not_all_octahedral_mirrors() {
        let th = elements("3*2");
        assert!(th.contains(&SymOp::inversion()));
        assert_eq!(th.proper_count(), 12);
        // T_h is not O_h: a four-fold rotation is absent
        let c4 = SymOp::rotation(DVec3::Z, TAU / 4.0);
        assert!(!th.contains(&c4));
    }

    #[test]
    fn test_inconsistent_spec_is_rejected() {
        let spec = GroupSpec {
            family: Family::Cyclic,
            embedding: Embedding::Triangle {
                orders: [4, 3, 2],
                mirrored: true,
            },
        };
        assert!(matches!(
            generate(&spec),
            Err(SymmetryError::UnsupportedFamily { .. })
        ));

        let spec = GroupSpec {
            family: Family::Dihedral,
            embedding: Embedding::Triangle {
                orders: [3, 3, 3],
                mirrored: false,
            },
        };
        assert!(matches!(
            generate(&spec),
            Err(SymmetryError::UnsupportedFamily { .. })
        ));
    }
}
