//! Integration tests for group generation
//!
//! Checks every supported family against its theoretical order, plus the
//! set-level properties: closure, identity membership, determinism.
//!
//! Author: Moroya Sakamoto

use alice_orbifold::group::generate;
use alice_orbifold::signature::parse;
use alice_orbifold::types::{Family, SymOp, EPSILON};

/// (signature, expected order, expected proper count)
const ORDER_TABLE: &[(&str, usize, usize)] = &[
    // Trivial and near-trivial
    ("1", 1, 1),
    ("*", 2, 1),
    ("x", 2, 1),
    // Cyclic C_n
    ("22", 2, 2),
    ("33", 3, 3),
    ("66", 6, 6),
    // C_nv
    ("*22", 4, 2),
    ("*55", 10, 5),
    // C_nh
    ("2*", 4, 2),
    ("5*", 10, 5),
    // S_2n
    ("2x", 4, 2),
    ("3x", 6, 3),
    // Dihedral rotations D_n (as 22N triangle groups)
    ("222", 4, 4),
    ("322", 6, 6),
    ("622", 12, 12),
    // D_nh
    ("*222", 8, 4),
    ("*422", 16, 8),
    // D_nd
    ("2*2", 8, 4),
    ("2*6", 24, 12),
    // Polyhedral
    ("332", 12, 12),
    ("*332", 24, 12),
    ("3*2", 24, 12),
    ("432", 24, 24),
    ("*432", 48, 24),
    ("532", 60, 60),
    ("*532", 120, 60),
];

#[test]
fn test_theoretical_orders() {
    for &(sig, order, proper) in ORDER_TABLE {
        let set = generate(&parse(sig).unwrap()).unwrap();
        assert_eq!(set.len(), order, "order of {}", sig);
        assert_eq!(set.proper_count(), proper, "proper count of {}", sig);
        assert_eq!(set.improper_count(), order - proper, "improper count of {}", sig);
    }
}

#[test]
fn test_expected_order_matches_generation() {
    for &(sig, _, _) in ORDER_TABLE {
        let spec = parse(sig).unwrap();
        let set = generate(&spec).unwrap();
        assert_eq!(set.len(), spec.expected_order(), "{}", sig);
    }
}

#[test]
fn test_families() {
    let cases = [
        ("44", Family::Cyclic),
        ("4x", Family::Cyclic),
        ("422", Family::Dihedral),
        ("2*4", Family::Dihedral),
        ("*332", Family::Tetrahedral),
        ("3*2", Family::Tetrahedral),
        ("432", Family::Octahedral),
        ("*532", Family::Icosahedral),
    ];
    for (sig, family) in cases {
        assert_eq!(parse(sig).unwrap().family, family, "{}", sig);
    }
}

#[test]
fn test_identity_membership_everywhere() {
    for &(sig, _, _) in ORDER_TABLE {
        let set = generate(&parse(sig).unwrap()).unwrap();
        assert!(set.contains(&SymOp::IDENTITY), "{}", sig);
    }
}

#[test]
fn test_closure_under_composition() {
    // The worst numerical case: 120 irrational-angle elements
    let set = generate(&parse("*532").unwrap()).unwrap();
    for a in set.iter() {
        for b in set.iter() {
            assert!(set.contains(&a.compose(b)));
        }
    }
}

#[test]
fn test_inverses_are_present() {
    // Closure plus finiteness imply inverses; spot-check directly
    let set = generate(&parse("532").unwrap()).unwrap();
    for op in set.iter() {
        let inverse = SymOp {
            matrix: op.matrix.transpose(),
        };
        assert!(set.contains(&inverse));
    }
}

#[test]
fn test_generation_is_deterministic_as_a_set() {
    for sig in ["222", "3*2", "532", "*532"] {
        let a = generate(&parse(sig).unwrap()).unwrap();
        let b = generate(&parse(sig).unwrap()).unwrap();
        assert_eq!(a.len(), b.len(), "{}", sig);
        for op in a.iter() {
            assert!(b.contains(op), "{}", sig);
        }
    }
}

#[test]
fn test_orthogonality_of_every_element() {
    let set = generate(&parse("*532").unwrap()).unwrap();
    for op in set.iter() {
        let gram = SymOp {
            matrix: op.matrix * op.matrix.transpose(),
        };
        assert!(gram.approx_eq(&SymOp::IDENTITY, EPSILON));
        assert!((op.determinant().abs() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_permuted_triangle_signatures_generate_equal_sized_groups() {
    // Same abstract group, differently embedded domains
    for (a, b) in [("532", "253"), ("432", "243"), ("*332", "*233")] {
        let ga = generate(&parse(a).unwrap()).unwrap();
        let gb = generate(&parse(b).unwrap()).unwrap();
        assert_eq!(ga.len(), gb.len(), "{} vs {}", a, b);
    }
}
