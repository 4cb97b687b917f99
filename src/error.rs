//! Errors produced by column density calculations.

use crate::units::Dimension;
use thiserror::Error;

/// Errors that surface to the caller.
///
/// Physically out-of-range inputs that are expected in bulk calculations (unknown
/// transitions, non-positive excitation temperatures) are not errors; they propagate
/// as NaN through the numeric pipeline instead.
#[derive(Debug, Error)]
pub enum ColumnError {
    #[error("Expected a quantity of dimension {expected}, got {found}")]
    UnitMismatch {
        expected: Dimension,
        found: Dimension,
    },
    #[error("Level data for {species} is unavailable: {reason}")]
    DataUnavailable { species: String, reason: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ColumnError {
    pub fn data_unavailable<S: Into<String>, R: ToString>(species: S, reason: R) -> Self {
        Self::DataUnavailable {
            species: species.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColumnError>;
