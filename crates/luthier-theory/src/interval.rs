//! Interval values: signed semitone counts with name lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::Pitch;

/// Short and long interval names spanning 0-12 semitones (index = count).
const INTERVAL_NAMES: [(&str, &str); 13] = [
    ("P1", "Unison"),
    ("m2", "Minor Second"),
    ("M2", "Major Second"),
    ("m3", "Minor Third"),
    ("M3", "Major Third"),
    ("P4", "Perfect Fourth"),
    ("TT", "Tritone"),
    ("P5", "Perfect Fifth"),
    ("m6", "Minor Sixth"),
    ("M6", "Major Sixth"),
    ("m7", "Minor Seventh"),
    ("M7", "Major Seventh"),
    ("P8", "Octave"),
];

/// A signed semitone count between two pitches.
///
/// Any integer is a valid interval; only naming is restricted to the
/// single-octave table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval {
    semitones: i32,
}

impl Interval {
    /// Creates an interval from a semitone count. No validation.
    pub fn new(semitones: i32) -> Self {
        Self { semitones }
    }

    /// The interval between two pitches (`to` relative to `from`).
    pub fn between(from: &Pitch, to: &Pitch) -> Self {
        Self::new(to.semitones_from(from))
    }

    /// Looks up one of the 13 canonical short names (P1 through P8).
    ///
    /// Fails with [`TheoryError::UnknownIntervalName`] for anything else.
    ///
    /// # Examples
    /// ```
    /// use luthier_theory::Interval;
    ///
    /// assert_eq!(Interval::from_name("P5").unwrap().semitones(), 7);
    /// assert!(Interval::from_name("P9").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, TheoryError> {
        INTERVAL_NAMES
            .iter()
            .position(|(short, _)| *short == name)
            .map(|count| Self::new(count as i32))
            .ok_or_else(|| TheoryError::UnknownIntervalName {
                name: name.to_string(),
            })
    }

    /// The semitone count.
    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    /// The short name ("P5", "m3", ...) if the lookup lands in the table.
    ///
    /// The lookup runs through the inverted table: a non-negative count
    /// indexes as `12 - semitones`, so 0 names as "P8" and 12 as "P1".
    /// Negative counts index directly and always fall outside the table,
    /// as do counts beyond an octave; both yield `None`.
    pub fn short_name(&self) -> Option<&'static str> {
        self.name_entry().map(|(short, _)| short)
    }

    /// The long name ("Perfect Fifth", ...) under the same lookup rule as
    /// [`Interval::short_name`].
    pub fn long_name(&self) -> Option<&'static str> {
        self.name_entry().map(|(_, long)| long)
    }

    fn name_entry(&self) -> Option<(&'static str, &'static str)> {
        let offset = if self.semitones < 0 {
            self.semitones
        } else {
            12 - self.semitones
        };
        usize::try_from(offset)
            .ok()
            .and_then(|index| INTERVAL_NAMES.get(index))
            .copied()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.short_name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "{:+}", self.semitones),
        }
    }
}

impl FromStr for Interval {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
