//! Orbifold signature parsing
//!
//! Converts a signature string into a [`GroupSpec`]. Signatures follow the
//! orbifold notation of Conway, Burgiel and Goodman-Strauss's *The
//! Symmetries of Things*: each character lies in `0123456789*xo()`.
//! Digits before any `*` are gyration orders, digits after a `*` are
//! kaleidoscope orders, `x` is a miracle, `o` a wonder. `0` is read as an
//! infinite order, parens surround orders of 10 and above, and ones are
//! ignored. A few unicode aliases are accepted (`∞`, `★`, `❌`, `✕`).
//!
//! Parsing is a pure function of the string; whitespace and case are
//! normalized before token splitting. An empty or all-identity signature
//! resolves to the trivial group rather than erroring.
//!
//! Author: Moroya Sakamoto

use crate::error::SymmetryError;
use crate::types::{Embedding, GroupSpec, EPSILON};
use serde::{Deserialize, Serialize};

/// Supported maximum for a single rotation order.
///
/// Bounds the generated group size (at most `4 * MAX_ORDER` elements for the
/// dihedral extensions); larger orders are rejected at parse time.
pub const MAX_ORDER: u32 = 64;

/// Infinite rotation order, spelled `0` (or `∞`) in signatures.
const INF: u32 = 0;

/// Which pattern class a signature's orbifold cost puts it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Cost below 2: a finite spherical group (the supported class)
    Spherical,
    /// Cost exactly 2, no infinite orders: a wallpaper group
    Planar,
    /// Cost exactly 2 with an infinite order: a frieze group
    Frieze,
    /// Cost above 2
    Hyperbolic,
}

/// A tokenized orbifold signature.
///
/// Immutable once parsed. Token order is preserved: different permutations
/// of the same orders resolve to differently embedded fundamental domains,
/// which is intentional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    text: String,
    gyrations: Vec<u32>,
    kaleidoscopes: Vec<u32>,
    stars: u32,
    miracles: u32,
    wonders: u32,
}

/// Where parsed rotation orders are currently being collected
#[derive(PartialEq, Eq, Clone, Copy)]
enum Sink {
    Gyration,
    Kaleido,
    AfterMiracle,
}

fn bad(text: &str, reason: impl Into<String>) -> SymmetryError {
    SymmetryError::InvalidSignature {
        signature: text.to_string(),
        reason: reason.into(),
    }
}

impl Signature {
    /// Tokenize a signature string.
    ///
    /// Fails with [`SymmetryError::InvalidSignature`] on malformed tokens,
    /// impossible marker combinations, or rotation orders above
    /// [`MAX_ORDER`].
    pub fn parse(signature: &str) -> Result<Self, SymmetryError> {
        let text: String = signature
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();

        let mut gyrations = Vec::new();
        let mut kaleidoscopes = Vec::new();
        let mut stars = 0u32;
        let mut miracles = 0u32;
        let mut wonders = 0u32;
        let mut sink = Sink::Gyration;
        let mut parens: Option<String> = None;

        let mut push_order = |order: u32, sink: Sink| -> Result<(), SymmetryError> {
            if order > MAX_ORDER {
                return Err(bad(
                    &text,
                    format!("rotation order {} exceeds supported maximum {}", order, MAX_ORDER),
                ));
            }
            match sink {
                Sink::Gyration => gyrations.push(order),
                Sink::Kaleido => kaleidoscopes.push(order),
                Sink::AfterMiracle => {
                    return Err(bad(&text, "miracle (x) with centers is impossible"))
                }
            }
            Ok(())
        };

        let chars: Vec<char> = text.chars().collect();
        for &c in &chars {
            if let Some(digits) = parens.take() {
                match c {
                    ')' => {
                        let order: u32 = digits
                            .parse()
                            .map_err(|_| bad(&text, "empty or overlong parens"))?;
                        let order = if order == 0 { INF } else { order };
                        push_order(order, sink)?;
                    }
                    '0'..='9' => {
                        let mut digits = digits;
                        digits.push(c);
                        parens = Some(digits);
                    }
                    _ => return Err(bad(&text, format!("non-digit '{}' in parens", c))),
                }
                continue;
            }
            match c {
                '(' => parens = Some(String::new()),
                '0' | '∞' => push_order(INF, sink)?,
                '1'..='9' => push_order(c as u32 - '0' as u32, sink)?,
                '*' | '★' => {
                    stars += 1;
                    sink = Sink::Kaleido;
                }
                'x' | '❌' | '✕' => {
                    miracles += 1;
                    sink = Sink::AfterMiracle;
                }
                'o' if sink == Sink::Gyration => wonders += 1,
                'o' => {
                    return Err(bad(&text, "wandering (o) after inverse symmetry is impossible"))
                }
                _ => return Err(bad(&text, format!("unwanted '{}'", c))),
            }
        }
        if parens.is_some() {
            return Err(bad(&text, "unclosed '('"));
        }

        // Ones are identities and carry no symmetry
        gyrations.retain(|&n| n != 1);
        kaleidoscopes.retain(|&n| n != 1);

        Ok(Signature {
            text,
            gyrations,
            kaleidoscopes,
            stars,
            miracles,
            wonders,
        })
    }

    /// Gyration orders (rotation points that are not on mirrors), in
    /// signature order. `0` stands for an infinite order.
    pub fn gyrations(&self) -> &[u32] {
        &self.gyrations
    }

    /// Kaleidoscopic orders (rotation points where mirrors meet), in
    /// signature order.
    pub fn kaleidoscopes(&self) -> &[u32] {
        &self.kaleidoscopes
    }

    /// Number of `*` markers
    pub fn stars(&self) -> u32 {
        self.stars
    }

    /// Number of `x` markers
    pub fn miracles(&self) -> u32 {
        self.miracles
    }

    /// Number of `o` markers
    pub fn wonders(&self) -> u32 {
        self.wonders
    }

    /// Whether any token carries an infinite order
    pub fn has_infinite(&self) -> bool {
        self.gyrations.iter().chain(&self.kaleidoscopes).any(|&n| n == INF)
    }

    /// The orbifold cost of the signature.
    ///
    /// Gyrations of order n cost `1 - 1/n`, kaleidoscopic orders cost
    /// `1/2 - 1/2n`, stars and miracles cost 1, wonders cost 2.
    pub fn cost(&self) -> f64 {
        let part = |n: u32, full: f64| {
            if n == INF {
                full
            } else {
                full - full / f64::from(n)
            }
        };
        let gy: f64 = self.gyrations.iter().map(|&n| part(n, 1.0)).sum();
        let ka: f64 = self.kaleidoscopes.iter().map(|&n| part(n, 0.5)).sum();
        gy + ka + f64::from(self.stars) + f64::from(self.miracles) + 2.0 * f64::from(self.wonders)
    }

    /// Classify the signature by cost
    pub fn kind(&self) -> PatternKind {
        let cost = self.cost();
        if cost > 2.0 + EPSILON {
            PatternKind::Hyperbolic
        } else if cost < 2.0 - EPSILON {
            PatternKind::Spherical
        } else if self.has_infinite() {
            PatternKind::Frieze
        } else {
            PatternKind::Planar
        }
    }

    /// Resolve the token lists into a spherical group specification.
    ///
    /// Single-order shorthands are accepted: `N` for `NN` and `*N` for
    /// `*NN`, since the cyclic and dihedral-reflective groups are the only
    /// spherical readings of those tokens.
    pub fn resolve(&self) -> Result<GroupSpec, SymmetryError> {
        match self.kind() {
            PatternKind::Hyperbolic => {
                return Err(bad(
                    &self.text,
                    format!("hyperbolic groups not supported (cost {} > 2)", self.cost()),
                ))
            }
            PatternKind::Planar | PatternKind::Frieze => {
                return Err(bad(&self.text, "planar and frieze patterns are not spherical"))
            }
            PatternKind::Spherical => {}
        }
        if self.has_infinite() {
            return Err(bad(&self.text, "spherical groups cannot have infinites (0)"));
        }

        let embedding = match (
            self.gyrations.as_slice(),
            self.kaleidoscopes.as_slice(),
            self.stars,
            self.miracles,
        ) {
            (&[], &[], 0, 0) => Embedding::Trivial,
            (&[], &[], _, 0) => Embedding::MirrorOnly,
            (&[], &[], 0, _) => Embedding::Rotoreflection { n: 1 },
            (&[n], &[], 0, 0) => Embedding::Cyclic { n },
            (&[m, n], &[], 0, 0) if m == n => Embedding::Cyclic { n },
            (&[_, _], &[], 0, 0) => {
                return Err(bad(&self.text, "spherical group MN must have M = N"))
            }
            (&[n], &[], 1, 0) => Embedding::HorizontalMirror { n },
            (&[n], &[], 0, 1) => Embedding::Rotoreflection { n },
            (&[], &[n], 1, 0) => Embedding::Kaleido { n },
            (&[], &[m, n], 1, 0) if m == n => Embedding::Kaleido { n },
            (&[], &[_, _], 1, 0) => {
                return Err(bad(&self.text, "spherical group *MN must have M = N"))
            }
            (&[3], &[2], 1, 0) => Embedding::Pyritohedral,
            (&[2], &[n], 1, 0) => Embedding::Antiprismatic { n },
            (&[m, n, p], &[], 0, 0) => Embedding::Triangle {
                orders: [m, n, p],
                mirrored: false,
            },
            (&[], &[m, n, p], 1, 0) => Embedding::Triangle {
                orders: [m, n, p],
                mirrored: true,
            },
            (_, &[], 0, 0) => {
                return Err(bad(&self.text, "gyrational spherical groups must be MN or MNP"))
            }
            (&[], _, _, 0) => {
                return Err(bad(
                    &self.text,
                    "kaleidoscopic spherical groups must be *MN or *MNP",
                ))
            }
            _ => {
                return Err(bad(
                    &self.text,
                    "mixed spherical groups must be 2*N, 3*2, N* or Nx",
                ))
            }
        };

        GroupSpec::from_embedding(embedding)
            .ok_or_else(|| bad(&self.text, "orders do not close into a finite spherical group"))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Parse an orbifold signature string into a group specification.
///
/// Convenience for `Signature::parse(s)?.resolve()`.
pub fn parse(signature: &str) -> Result<GroupSpec, SymmetryError> {
    Signature::parse(signature)?.resolve()
}
