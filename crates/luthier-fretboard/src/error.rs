//! Error types for fretboard derivation.

use thiserror::Error;

use luthier_theory::TheoryError;

/// Errors that can occur deriving a fretboard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    #[error("invalid fret count {fret_count}, must be non-negative")]
    InvalidFretCount { fret_count: i32 },
    #[error(transparent)]
    Theory(#[from] TheoryError),
}
