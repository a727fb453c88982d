//! Luthier Core Theory Library
//!
//! This crate models Western 12-tone equal-temperament music theory as pure
//! in-memory computation: pitches with cached frequencies, signed intervals,
//! and diatonic/modal scale derivation with letter-correct enharmonic
//! spelling. There is no I/O, persistence, or playback surface.
//!
//! # Overview
//!
//! - **Pitch class table**: process-wide constant data mapping the closed
//!   set of note names to classes 0-11, with per-class sharp/flat spelling
//!   pairs and the rotatable natural-letter cycle.
//! - **[`Pitch`]**: a note name bound to an octave; absolute offset from C0
//!   and frequency are cached at construction. Transposition returns a new
//!   value; enharmonic re-spelling is the one in-place mutation.
//! - **[`Interval`]**: a signed semitone count with closed-catalog name
//!   lookup.
//! - **[`ScaleSequence`]**: the ordered pitches of a scale walked from a
//!   root through a [`Mode`] (or explicit) step pattern, each degree
//!   spelled so seven-step patterns land every natural letter exactly once,
//!   plus lazy triad enumeration.
//!
//! # Example
//!
//! ```
//! use luthier_theory::{Interval, Mode, Pitch, ScaleSequence};
//!
//! let scale = ScaleSequence::new(Pitch::new("G")?, Mode::Major)?;
//! assert_eq!(scale.tones(), ["G", "A", "B", "C", "D", "E", "F#", "G"]);
//!
//! let [root, third, fifth] = scale.triads().next().unwrap();
//! assert_eq!(Interval::between(root, fifth), Interval::new(7));
//! assert_eq!(third.to_string(), "B4");
//! # Ok::<(), luthier_theory::TheoryError>(())
//! ```
//!
//! # Concurrency
//!
//! All values are plain data, safe to construct and use from independent
//! threads. [`Pitch::toggle_enharmonic`] is the single non-reentrant
//! operation: never call it on an instance another thread can observe.
//!
//! # Modules
//!
//! - [`error`]: the crate error type
//! - [`pitch_class`]: constant tables and the natural-letter cycle
//! - [`pitch`]: the [`Pitch`] value type
//! - [`interval`]: the [`Interval`] value type
//! - [`scale`]: [`Mode`] catalog and [`ScaleSequence`] derivation

pub mod error;
pub mod interval;
pub mod pitch;
pub mod pitch_class;
pub mod scale;

// Re-export commonly used types at the crate root
pub use error::TheoryError;
pub use interval::Interval;
pub use pitch::{Pitch, DEFAULT_OCTAVE};
pub use pitch_class::{A4_FREQ, A4_OFFSET, NATURAL_LETTERS, SEMITONES_PER_OCTAVE};
pub use scale::{Mode, ScaleSequence};

/// Crate version for library identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
