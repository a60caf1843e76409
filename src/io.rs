//! Placement I/O
//!
//! Human-readable JSON serialization of [`Placement`] records, for hosts
//! that consume the data product out of process. Streams directly through
//! `BufReader`/`BufWriter` rather than building intermediate strings for
//! file I/O. Not part of the core contract: the engine itself is string
//! in, data out.
//!
//! Author: Moroya Sakamoto

use crate::placement::Placement;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Placement I/O errors
#[derive(Error, Debug)]
pub enum IoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Save a placement to a JSON file
pub fn save_placement(placement: &Placement, path: impl AsRef<Path>) -> Result<(), IoError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, placement)
        .map_err(|e| IoError::Serialization(e.to_string()))?;
    Ok(())
}

/// Load a placement from a JSON file
pub fn load_placement(path: impl AsRef<Path>) -> Result<Placement, IoError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Serialize a placement to a JSON string
pub fn to_json_string(placement: &Placement) -> Result<String, IoError> {
    serde_json::to_string_pretty(placement).map_err(|e| IoError::Serialization(e.to_string()))
}

/// Parse a placement from a JSON string
pub fn from_json_string(json: &str) -> Result<Placement, IoError> {
    serde_json::from_str(json).map_err(|e| IoError::Serialization(e.to_string()))
}
