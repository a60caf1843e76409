//! Error taxonomy for the symmetry engine
//!
//! All errors are detected synchronously at the boundary of the component
//! that first observes the violation and are propagated unchanged to the
//! caller. The computation is deterministic, so there are no retries: an
//! invalid signature cannot succeed on a second attempt.
//!
//! Author: Moroya Sakamoto

use thiserror::Error;

/// Errors produced by the symmetry-group pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymmetryError {
    /// Malformed or unsupported orbifold signature (user-correctable)
    #[error("invalid orbifold signature '{signature}': {reason}")]
    InvalidSignature {
        /// The signature as given by the caller (after normalization)
        signature: String,
        /// What went wrong, naming the offending token where possible
        reason: String,
    },

    /// Group specification outside the five spherical families.
    ///
    /// Unreachable through `parse`; reachable when a caller hand-builds or
    /// deserializes an inconsistent [`GroupSpec`](crate::types::GroupSpec).
    #[error("unsupported symmetry family: {detail}")]
    UnsupportedFamily {
        /// Description of the inconsistency
        detail: String,
    },

    /// Canonical sequence was empty (every group contains the identity).
    ///
    /// Signals an upstream generation defect, not a caller mistake.
    #[error("empty group: canonical sequence contains no elements")]
    EmptyGroup,
}
