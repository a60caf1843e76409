//! Batch placement building
//!
//! Resolving many signatures is embarrassingly parallel: the pipeline is a
//! pure function with no shared state, so requests run independently.
//! Uses rayon for the parallel variant. Per-item results are returned in
//! input order; an invalid signature fails its own slot only.
//!
//! Author: Moroya Sakamoto

use crate::engine::SymmetryGroup;
use crate::error::SymmetryError;
use crate::placement::Placement;
use crate::types::Mode;
use rayon::prelude::*;

/// Build placements for a batch of signatures (single-threaded)
pub fn build_batch(
    signatures: &[&str],
    mode: Mode,
    lock_transform: bool,
) -> Vec<Result<Placement, SymmetryError>> {
    signatures
        .iter()
        .map(|sig| SymmetryGroup::from_signature(sig)?.placements(mode, lock_transform))
        .collect()
}

/// Build placements for a batch of signatures (parallel)
pub fn build_batch_parallel(
    signatures: &[&str],
    mode: Mode,
    lock_transform: bool,
) -> Vec<Result<Placement, SymmetryError>> {
    signatures
        .par_iter()
        .map(|sig| SymmetryGroup::from_signature(sig)?.placements(mode, lock_transform))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_results_in_input_order() {
        let sigs = ["1", "222", "*432"];
        let out = build_batch(&sigs, Mode::Tile, false);
        let counts: Vec<usize> = out
            .iter()
            .map(|r| r.as_ref().unwrap().placements.len())
            .collect();
        assert_eq!(counts, vec![1, 4, 48]);
    }

    #[test]
    fn test_invalid_signature_fails_its_slot_only() {
        let sigs = ["532", "*999999", "44"];
        let out = build_batch(&sigs, Mode::Tile, false);
        assert!(out[0].is_ok());
        assert!(out[1].is_err());
        assert!(out[2].is_ok());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sigs = ["1", "*", "x", "55", "2*3", "3*2", "532", "*532"];
        let seq = build_batch(&sigs, Mode::Tile, false);
        let par = build_batch_parallel(&sigs, Mode::Tile, false);
        for (a, b) in seq.iter().zip(par.iter()) {
            let (a, b) = (a.as_ref().unwrap(), b.as_ref().unwrap());
            assert_eq!(a.identifier, b.identifier);
            assert_eq!(a.placements.len(), b.placements.len());
        }
    }
}
