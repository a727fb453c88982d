//! Luthier Fretboard Backend
//!
//! Derives the complete pitch layout of a fretted instrument from a tuning:
//! for every string, the ordered pitches produced by stepping the open
//! string up one semitone per fret. A thin consumer of
//! [`luthier_theory`]; all pitch arithmetic lives there.
//!
//! # Example
//!
//! ```
//! use luthier_fretboard::{Fretboard, Tuning};
//!
//! let board = Fretboard::new(Tuning::standard(), 12)?;
//! // Strings are publicly numbered from the highest-pitched down.
//! let high_e = board.at(0).unwrap();
//! assert_eq!(high_e[0].to_string(), "E4");
//! assert_eq!(high_e[12].to_string(), "E5");
//! # Ok::<(), luthier_fretboard::FretboardError>(())
//! ```
//!
//! # Modules
//!
//! - [`error`]: the crate error type
//! - [`tuning`]: open-string pitch sets and the named-tuning catalog
//! - [`board`]: the derived [`Fretboard`]

pub mod board;
pub mod error;
pub mod tuning;

// Re-export main types
pub use board::{Fretboard, DEFAULT_FRET_COUNT};
pub use error::FretboardError;
pub use tuning::Tuning;
