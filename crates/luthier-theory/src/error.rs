//! Error types for theory value construction and transformation.

use thiserror::Error;

/// Errors that can occur constructing or transforming theory values.
///
/// Every variant is deterministic and caller-triggered; there is no
/// transient failure class. Constructors either return a fully-formed
/// value or one of these, never a partially-initialized value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("invalid note name '{name}'")]
    InvalidNote { name: String },
    #[error("step lands {offset} semitones from C0, below the range floor")]
    BelowRangeFloor { offset: i32 },
    #[error("unknown interval name '{name}'")]
    UnknownIntervalName { name: String },
    #[error("unknown scale name '{name}'")]
    UnknownScaleName { name: String },
}
