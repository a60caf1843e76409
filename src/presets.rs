//! Named signature presets
//!
//! Static mappings from friendly names to literal orbifold signatures,
//! resolved before anything reaches the parser, plus the completion list
//! of signatures worth offering in a picker. Immutable and built once at
//! first use.
//!
//! Author: Moroya Sakamoto

use std::collections::HashMap;

lazy_static::lazy_static! {
    /// Signature completion list, roughly ordered from small to large groups
    static ref SIGNATURES: Vec<&'static str> = vec![
        "", "1", "*", "x",
        "2*", "3*", "4*", "5*", "6*",
        "2x", "3x", "4x", "5x", "6x",
        "*532", "532",
        "*432", "432",
        "*332", "332",
        "*622", "622",
        "*522", "522",
        "*422", "422",
        "*322", "322",
        "*222", "222",
        "*22", "22",
        "*33", "33",
        "*44", "44",
        "*55", "55",
        "*66", "66",
        "3*2",
        "2*2", "2*3", "2*4", "2*5", "2*6",
    ];

    /// Friendly name -> signature
    static ref NAMED: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("none", "1");
        m.insert("mirror", "*");
        m.insert("inversion", "x");
        m.insert("tetrahedron", "*332");
        m.insert("cube", "*432");
        m.insert("octahedron", "*432");
        m.insert("dodecahedron", "*532");
        m.insert("icosahedron", "*532");
        m.insert("pyritohedron", "3*2");
        m.insert("snub cube", "432");
        m.insert("snub dodecahedron", "532");
        m.insert("antiprism", "2*4");
        m
    };
}

/// All signatures in the completion list
pub fn signatures() -> &'static [&'static str] {
    &SIGNATURES
}

/// Resolve a friendly preset name to its signature (case-insensitive)
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED.get(name.trim().to_lowercase().as_str()).copied()
}

/// Signatures starting with the given prefix, for interactive completion
pub fn complete(prefix: &str) -> Vec<&'static str> {
    SIGNATURES
        .iter()
        .filter(|s| s.starts_with(prefix))
        .copied()
        .collect()
}
