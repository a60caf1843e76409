//! Core types for the orbifold symmetry engine
//!
//! Defines the orthogonal transform wrapper ([`SymOp`]), the resolved group
//! specification ([`GroupSpec`]) and the supporting enums shared by every
//! stage of the pipeline.
//!
//! Author: Moroya Sakamoto

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Numerical tolerance for transform equality.
///
/// Repeated composition of irrational-angle rotations (the icosahedral case)
/// never produces bit-exact repeats, so two transforms are the same group
/// element when every matrix entry agrees within this bound.
pub const EPSILON: f64 = 1e-6;

/// Quantize a value onto the `EPSILON` grid for ordering keys.
#[inline]
pub(crate) fn quantize(x: f64) -> i64 {
    (x / EPSILON).round() as i64
}

/// A single symmetry operation: an orthogonal 3x3 matrix with det +1
/// (rotation) or -1 (rotation-reflection), about the shared center.
///
/// Value type; equality is defined up to [`EPSILON`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SymOp {
    /// The orthogonal matrix
    pub matrix: DMat3,
}

impl SymOp {
    /// The identity operation
    pub const IDENTITY: SymOp = SymOp {
        matrix: DMat3::IDENTITY,
    };

    /// Rotation about an arbitrary axis (normalized internally)
    #[inline]
    pub fn rotation(axis: DVec3, angle: f64) -> Self {
        SymOp {
            matrix: DMat3::from_axis_angle(axis.normalize(), angle),
        }
    }

    /// Reflection across the XZ plane, `diag(1, -1, 1)`.
    ///
    /// Every improper element of every supported group is a rotation
    /// composed with this mirror; the embeddings are chosen so that the XZ
    /// plane is a mirror whenever the group has any.
    #[inline]
    pub fn mirror_xz() -> Self {
        SymOp {
            matrix: DMat3::from_diagonal(DVec3::new(1.0, -1.0, 1.0)),
        }
    }

    /// Central inversion, `-I`
    #[inline]
    pub fn inversion() -> Self {
        SymOp {
            matrix: DMat3::from_diagonal(DVec3::new(-1.0, -1.0, -1.0)),
        }
    }

    /// Compose two operations: `self` applied after `other`
    #[inline]
    pub fn compose(&self, other: &SymOp) -> Self {
        SymOp {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Apply the operation to a point
    #[inline]
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.matrix * point
    }

    /// Determinant (+1 proper, -1 improper)
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Whether this is an improper operation (rotation-reflection)
    #[inline]
    pub fn is_improper(&self) -> bool {
        self.determinant() < 0.0
    }

    /// The rotation part of the operation.
    ///
    /// Proper operations are returned unchanged; improper ones are composed
    /// with the XZ mirror (self-inverse), which yields a pure rotation.
    #[inline]
    pub fn proper_part(&self) -> DMat3 {
        if self.is_improper() {
            self.matrix * Self::mirror_xz().matrix
        } else {
            self.matrix
        }
    }

    /// Entrywise equality within `epsilon`
    pub fn approx_eq(&self, other: &SymOp, epsilon: f64) -> bool {
        let a = self.matrix.to_cols_array();
        let b = other.matrix.to_cols_array();
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < epsilon)
    }

    /// Twist angle of the rotation part about `axis`, in `[0, 2*pi)`.
    ///
    /// Swing-twist decomposition of the rotation quaternion; the result is
    /// independent of the quaternion sign branch.
    pub fn twist_angle(&self, axis: DVec3) -> f64 {
        let q = DQuat::from_mat3(&self.proper_part());
        // Snap near-zero components before atan2: for half-turns about a
        // perpendicular axis both arguments are pure noise, and the
        // quadrant must not depend on its sign
        let snap = |x: f64| if x.abs() < 1e-12 { 0.0 } else { x };
        let d = snap(DVec3::new(q.x, q.y, q.z).dot(axis));
        let w = snap(q.w);
        let angle = (2.0 * d.atan2(w)).rem_euclid(TAU);
        if TAU - angle < 1e-9 {
            0.0
        } else {
            angle
        }
    }

    /// Rotation axis of the rotation part, sign-canonicalized so the first
    /// significant component is positive. `None` for the identity rotation.
    pub fn rotation_axis(&self) -> Option<DVec3> {
        let q = DQuat::from_mat3(&self.proper_part());
        let v = DVec3::new(q.x, q.y, q.z);
        if v.length() < EPSILON {
            return None;
        }
        let mut axis = v.normalize();
        for c in [axis.x, axis.y, axis.z] {
            if c > EPSILON {
                break;
            }
            if c < -EPSILON {
                axis = -axis;
                break;
            }
        }
        Some(axis)
    }

    /// Matrix entries quantized onto the `EPSILON` grid, column-major.
    /// Used as a reproducible ordering tiebreak.
    pub(crate) fn quantized_entries(&self) -> [i64; 9] {
        let a = self.matrix.to_cols_array();
        let mut out = [0i64; 9];
        for (o, x) in out.iter_mut().zip(a.iter()) {
            *o = quantize(*x);
        }
        out
    }
}

/// The five spherical symmetry families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// C_n and its reflective extensions (C_nv, C_nh, S_2n), including the
    /// trivial group, the single mirror and the central inversion
    Cyclic,
    /// D_n, D_nh, D_nd
    Dihedral,
    /// T, T_d, T_h
    Tetrahedral,
    /// O, O_h
    Octahedral,
    /// I, I_h
    Icosahedral,
}

/// How the group is embedded in space.
///
/// Each case fixes the generator set, the principal axis and the fundamental
/// tile. Different token permutations of the same orders resolve to
/// different embeddings: the abstract group is the same, but the fundamental
/// domain sits differently according to the order of the centers in the
/// signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Embedding {
    /// Trivial group C_1 (empty signature or all ones)
    Trivial,
    /// Single mirror, signature `*`
    MirrorOnly,
    /// Cyclic C_n about Z, signature `NN`
    Cyclic {
        /// Principal rotation order
        n: u32,
    },
    /// C_nv about Z, signature `*NN` (n rotations plus n vertical mirrors)
    Kaleido {
        /// Principal rotation order
        n: u32,
    },
    /// C_nh about Y, signature `N*` (horizontal mirror)
    HorizontalMirror {
        /// Principal rotation order
        n: u32,
    },
    /// S_2n about Y, signature `Nx` (`x` alone is the central inversion)
    Rotoreflection {
        /// Principal rotation order
        n: u32,
    },
    /// D_nd about X, signature `2*N`
    Antiprismatic {
        /// Principal rotation order
        n: u32,
    },
    /// Pyritohedral group T_h, signature `3*2`
    Pyritohedral,
    /// Spherical triangle group: rotations `MNP`, or the full kaleidoscopic
    /// group `*MNP` when mirrored. Orders are kept in signature order.
    Triangle {
        /// Vertex rotation orders in signature order
        orders: [u32; 3],
        /// Whether the triangle sides are mirrors (`*MNP`)
        mirrored: bool,
    },
}

/// Resolved group specification: family tag plus the concrete embedding.
///
/// Derived deterministically from an orbifold signature by the parser and
/// consumed by the generator. The mirror/inversion flags are derived
/// accessors, not stored state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Resolved spherical family
    pub family: Family,
    /// Spatial embedding driving generation
    pub embedding: Embedding,
}

/// Format a rotation order the way signatures spell it: parens for >= 10.
fn fmt_order(n: u32) -> String {
    if n >= 10 {
        format!("({})", n)
    } else {
        n.to_string()
    }
}

impl GroupSpec {
    /// Family implied by an embedding, if it names a valid spherical group.
    ///
    /// Returns `None` for triangle orders outside {22N, 233, 234, 235} up to
    /// permutation; those do not close into a finite spherical group.
    pub fn family_of(embedding: &Embedding) -> Option<Family> {
        match embedding {
            Embedding::Trivial | Embedding::MirrorOnly => Some(Family::Cyclic),
            Embedding::Cyclic { n }
            | Embedding::Kaleido { n }
            | Embedding::HorizontalMirror { n }
            | Embedding::Rotoreflection { n } => (*n >= 1).then_some(Family::Cyclic),
            Embedding::Antiprismatic { n } => (*n >= 2).then_some(Family::Dihedral),
            Embedding::Pyritohedral => Some(Family::Tetrahedral),
            Embedding::Triangle { orders, .. } => {
                let mut s = *orders;
                s.sort_unstable();
                match s {
                    [2, 2, n] if n >= 2 => Some(Family::Dihedral),
                    [2, 3, 3] => Some(Family::Tetrahedral),
                    [2, 3, 4] => Some(Family::Octahedral),
                    [2, 3, 5] => Some(Family::Icosahedral),
                    _ => None,
                }
            }
        }
    }

    /// Build a specification from an embedding, tagging the family.
    pub(crate) fn from_embedding(embedding: Embedding) -> Option<Self> {
        Self::family_of(&embedding).map(|family| GroupSpec { family, embedding })
    }

    /// Principal rotation order: n for the cyclic and dihedral families,
    /// the highest vertex order for the polyhedral ones.
    pub fn principal_order(&self) -> u32 {
        match &self.embedding {
            Embedding::Trivial | Embedding::MirrorOnly => 1,
            Embedding::Cyclic { n }
            | Embedding::Kaleido { n }
            | Embedding::HorizontalMirror { n }
            | Embedding::Rotoreflection { n }
            | Embedding::Antiprismatic { n } => *n,
            Embedding::Pyritohedral => 3,
            Embedding::Triangle { orders, .. } => orders.iter().copied().max().unwrap_or(1),
        }
    }

    /// Theoretical group order. Any deviation of the generated element set
    /// from this count is a generation bug, not acceptable output.
    pub fn expected_order(&self) -> usize {
        match &self.embedding {
            Embedding::Trivial => 1,
            Embedding::MirrorOnly => 2,
            Embedding::Cyclic { n } => *n as usize,
            Embedding::Kaleido { n }
            | Embedding::HorizontalMirror { n }
            | Embedding::Rotoreflection { n } => 2 * *n as usize,
            Embedding::Antiprismatic { n } => 4 * *n as usize,
            Embedding::Pyritohedral => 24,
            Embedding::Triangle { orders, mirrored } => {
                let [m, n, p] = orders.map(f64::from);
                let defect = 1.0 / m + 1.0 / n + 1.0 / p - 1.0;
                let rotations = (2.0 / defect).round() as usize;
                if *mirrored {
                    2 * rotations
                } else {
                    rotations
                }
            }
        }
    }

    /// Principal axis of the embedding, the reference for angle ordering.
    pub fn principal_axis(&self) -> DVec3 {
        match &self.embedding {
            Embedding::HorizontalMirror { .. } | Embedding::Rotoreflection { .. } => DVec3::Y,
            Embedding::Antiprismatic { .. } => DVec3::X,
            _ => DVec3::Z,
        }
    }

    /// Whether the group contains a mirror plane perpendicular to the
    /// principal axis.
    pub fn has_horizontal_mirror(&self) -> bool {
        match &self.embedding {
            Embedding::HorizontalMirror { .. } | Embedding::Pyritohedral => true,
            Embedding::Triangle {
                orders,
                mirrored: true,
            } => {
                let mut s = *orders;
                s.sort_unstable();
                // D_nh, O_h and I_h have a sigma_h; T_d does not
                s != [2, 3, 3]
            }
            _ => false,
        }
    }

    /// Whether the group contains mirror planes through the principal axis.
    pub fn has_vertical_mirrors(&self) -> bool {
        matches!(
            &self.embedding,
            Embedding::MirrorOnly
                | Embedding::Kaleido { .. }
                | Embedding::Antiprismatic { .. }
                | Embedding::Pyritohedral
                | Embedding::Triangle { mirrored: true, .. }
        )
    }

    /// Whether the group contains the central inversion `-I`.
    pub fn has_central_inversion(&self) -> bool {
        match &self.embedding {
            Embedding::HorizontalMirror { n } => n % 2 == 0,
            Embedding::Rotoreflection { n } | Embedding::Antiprismatic { n } => n % 2 == 1,
            Embedding::Pyritohedral => true,
            Embedding::Triangle {
                orders,
                mirrored: true,
            } => {
                let mut s = *orders;
                s.sort_unstable();
                match s {
                    [2, 2, n] => n % 2 == 0,
                    [2, 3, 3] => false,
                    _ => true,
                }
            }
            _ => false,
        }
    }

    /// Canonical signature string: the normalized re-serialization used for
    /// the group identifier. The trivial group serializes to `"1"`.
    ///
    /// Triangle orders keep their signature order; permutations that change
    /// the embedding keep distinct identifiers.
    pub fn canonical_signature(&self) -> String {
        match &self.embedding {
            Embedding::Trivial => "1".to_string(),
            Embedding::MirrorOnly => "*".to_string(),
            Embedding::Cyclic { n } => format!("{}{}", fmt_order(*n), fmt_order(*n)),
            Embedding::Kaleido { n } => format!("*{}{}", fmt_order(*n), fmt_order(*n)),
            Embedding::HorizontalMirror { n } => format!("{}*", fmt_order(*n)),
            Embedding::Rotoreflection { n } => {
                if *n == 1 {
                    "x".to_string()
                } else {
                    format!("{}x", fmt_order(*n))
                }
            }
            Embedding::Antiprismatic { n } => format!("2*{}", fmt_order(*n)),
            Embedding::Pyritohedral => "3*2".to_string(),
            Embedding::Triangle { orders, mirrored } => {
                let body: String = orders.iter().map(|&n| fmt_order(n)).collect();
                if *mirrored {
                    format!("*{}", body)
                } else {
                    body
                }
            }
        }
    }
}

/// What the placement builder emits for each group element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// One placement per group element, tiling the sphere with copies of the
    /// fundamental tile
    Tile,
    /// One representative placement per distinct rotation axis, for
    /// visualizing the symmetry's generating axes
    Axes,
}
