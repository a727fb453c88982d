//! Pitch values: a note name bound to an octave.
//!
//! Absolute offset (semitones above C0) and frequency are computed once at
//! construction; both are read-heavy and never change for a given pitch.
//! The only in-place mutation is [`Pitch::toggle_enharmonic`], which
//! re-spells the note without moving it.

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch_class::{self, A4_FREQ, A4_OFFSET, SEMITONES_PER_OCTAVE};

/// Default octave used when none is given.
pub const DEFAULT_OCTAVE: i32 = 4;

/// A note name bound to an octave, e.g. `C#4`.
///
/// Serializes as its display form (`"C#4"`) and deserializes back through
/// the exact-token parser, so invalid names never enter through serde.
///
/// # Examples
/// ```
/// use luthier_theory::Pitch;
///
/// let a4 = Pitch::new("A").unwrap();
/// assert_eq!(a4.frequency(), 440.0);
/// assert_eq!(a4.to_string(), "A4");
///
/// let fifth = a4.step(7, false).unwrap();
/// assert_eq!(fifth.to_string(), "E5");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(into = "String")]
pub struct Pitch {
    note: &'static str,
    octave: i32,
    offset: i32,
    frequency: f64,
}

impl Pitch {
    /// Creates a pitch in the default octave (4).
    ///
    /// Fails with [`TheoryError::InvalidNote`] if `note` is not one of the
    /// accepted note names.
    pub fn new(note: &str) -> Result<Self, TheoryError> {
        Self::with_octave(note, DEFAULT_OCTAVE)
    }

    /// Creates a pitch in an explicit octave.
    ///
    /// # Examples
    /// ```
    /// use luthier_theory::Pitch;
    ///
    /// let e2 = Pitch::with_octave("E", 2).unwrap();
    /// assert_eq!(e2.offset(), 28);
    /// assert!(Pitch::with_octave("X", 2).is_err());
    /// ```
    pub fn with_octave(note: &str, octave: i32) -> Result<Self, TheoryError> {
        let (token, class) = pitch_class::lookup(note)?;
        Ok(Self::from_parts(token, class, octave))
    }

    /// Creates a pitch from a pitch class, picking the sharp or flat
    /// spelling. Total over any class input (reduced modulo 12).
    pub fn from_spelling(class: u8, octave: i32, prefer_sharp: bool) -> Self {
        let note = pitch_class::spelling_of(class, prefer_sharp);
        Self::from_parts(note, class % SEMITONES_PER_OCTAVE as u8, octave)
    }

    fn from_parts(note: &'static str, class: u8, octave: i32) -> Self {
        let offset = class as i32 + SEMITONES_PER_OCTAVE * octave;
        let frequency = A4_FREQ * 2f64.powf((offset - A4_OFFSET) as f64 / 12.0);
        Self {
            note,
            octave,
            offset,
            frequency,
        }
    }

    /// The note name, canonicalized into the table's token set.
    pub fn note(&self) -> &'static str {
        self.note
    }

    /// The octave this pitch was constructed in.
    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// Absolute offset in semitones from C0.
    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The pitch class (0-11) of this pitch.
    pub fn pitch_class(&self) -> u8 {
        self.offset.rem_euclid(SEMITONES_PER_OCTAVE) as u8
    }

    /// Frequency in Hz, from `440 * 2^((offset - 57) / 12)`.
    ///
    /// Exact formula output; callers round for display.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// The natural letter of the note name.
    pub fn letter(&self) -> char {
        self.note.as_bytes()[0] as char
    }

    /// Whether the pitch class is one of the five black-key classes and so
    /// carries a genuine enharmonic pair.
    pub fn has_enharmonic(&self) -> bool {
        matches!(self.pitch_class(), 1 | 3 | 6 | 8 | 10)
    }

    /// Signed semitone distance from `other` to `self`.
    ///
    /// Not normalized: the result may be negative or exceed an octave.
    pub fn semitones_from(&self, other: &Pitch) -> i32 {
        self.offset - other.offset
    }

    /// Returns the pitch `semitones` away.
    ///
    /// The result spells sharp when stepping up and flat when stepping
    /// down; a zero step returns an identical copy, spelling untouched.
    /// With `reset_octave` the result keeps this pitch's octave number
    /// instead of deriving it from the target offset.
    ///
    /// Fails with [`TheoryError::BelowRangeFloor`] when the target falls
    /// below C0.
    ///
    /// # Examples
    /// ```
    /// use luthier_theory::Pitch;
    ///
    /// let g4 = Pitch::new("G").unwrap();
    /// assert_eq!(g4.step(1, false).unwrap().to_string(), "G#4");
    /// assert_eq!(g4.step(-1, false).unwrap().to_string(), "Gb4");
    /// assert!(Pitch::with_octave("C", 0).unwrap().step(-1, false).is_err());
    /// ```
    pub fn step(&self, semitones: i32, reset_octave: bool) -> Result<Pitch, TheoryError> {
        if semitones == 0 {
            return Ok(self.clone());
        }
        let target = self.offset + semitones;
        if target < 0 {
            return Err(TheoryError::BelowRangeFloor { offset: target });
        }
        let octave = if reset_octave {
            self.octave
        } else {
            target / SEMITONES_PER_OCTAVE
        };
        let class = (target % SEMITONES_PER_OCTAVE) as u8;
        let note = pitch_class::spelling_of(class, semitones > 0);
        Ok(Self::from_parts(note, class, octave))
    }

    /// Re-spells the note in place to the other name of its pitch class.
    ///
    /// Offset and frequency are unchanged. White-key classes have a
    /// degenerate pair, so their name stays put. For spellings outside the
    /// pair ("B#", "E#", "Cb", "Fb"), `prefer_sharp` selects which pair
    /// element to adopt.
    ///
    /// This is the one non-reentrant operation on a pitch: do not call it
    /// on an instance shared with another thread.
    pub fn toggle_enharmonic(&mut self, prefer_sharp: bool) {
        let (sharp, flat) = pitch_class::spellings_of(self.pitch_class());
        self.note = if self.note == sharp {
            flat
        } else if self.note == flat {
            sharp
        } else if prefer_sharp {
            sharp
        } else {
            flat
        };
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

impl Sub for &Pitch {
    type Output = i32;

    fn sub(self, other: &Pitch) -> i32 {
        self.semitones_from(other)
    }
}

impl FromStr for Pitch {
    type Err = TheoryError;

    /// Parses the display form `"{note}{octave}"`, e.g. `"C#4"` or
    /// `"Bb-1"`. Exact token match only: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidNote {
            name: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.is_empty() || !bytes[0].is_ascii_uppercase() {
            return Err(invalid());
        }
        let name_len = if bytes.len() >= 2 && (bytes[1] == b'#' || bytes[1] == b'b') {
            2
        } else {
            1
        };
        let (name, octave) = s.split_at(name_len);
        let octave = octave.parse::<i32>().map_err(|_| invalid())?;
        Self::with_octave(name, octave)
    }
}

impl TryFrom<String> for Pitch {
    type Error = TheoryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Pitch> for String {
    fn from(pitch: Pitch) -> String {
        pitch.to_string()
    }
}

impl<'de> Deserialize<'de> for Pitch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::try_from(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn a4_is_concert_pitch() {
        let a4 = Pitch::new("A").unwrap();
        assert_eq!(a4.frequency(), 440.0);
        assert_eq!(a4.offset(), 57);
    }

    #[test]
    fn octave_doubles_frequency() {
        let a4 = Pitch::new("A").unwrap();
        let a5 = Pitch::with_octave("A", 5).unwrap();
        assert_eq!(a5.frequency() / a4.frequency(), 2.0);
    }

    #[test]
    fn construction_rejects_unknown_names() {
        assert_eq!(
            Pitch::new("Z"),
            Err(TheoryError::InvalidNote {
                name: "Z".to_string()
            })
        );
    }

    #[test]
    fn zero_step_is_identity() {
        let fb3 = Pitch::with_octave("Fb", 3).unwrap();
        let same = fb3.step(0, false).unwrap();
        assert_eq!(same, fb3);
        // Alias spelling survives a zero step.
        assert_eq!(same.note(), "Fb");
    }

    #[test]
    fn step_up_and_back_restores_offset() {
        let c4 = Pitch::new("C").unwrap();
        for s in [1, 3, 7, 12, 25] {
            let there_and_back = c4.step(s, false).unwrap().step(-s, false).unwrap();
            assert_eq!(there_and_back.offset(), c4.offset(), "step of {s}");
        }
    }

    #[test]
    fn step_spelling_follows_direction() {
        let g4 = Pitch::new("G").unwrap();
        assert_eq!(g4.step(1, false).unwrap().note(), "G#");
        assert_eq!(g4.step(-1, false).unwrap().note(), "Gb");
    }

    #[test]
    fn step_below_c0_fails() {
        let c0 = Pitch::with_octave("C", 0).unwrap();
        assert_eq!(
            c0.step(-1, false),
            Err(TheoryError::BelowRangeFloor { offset: -1 })
        );
    }

    #[test]
    fn reset_octave_keeps_the_octave_number() {
        let b4 = Pitch::new("B").unwrap();
        let wrapped = b4.step(1, true).unwrap();
        assert_eq!(wrapped.to_string(), "C4");
        let derived = b4.step(1, false).unwrap();
        assert_eq!(derived.to_string(), "C5");
    }

    #[test]
    fn toggle_enharmonic_swaps_the_pair() {
        let mut p = Pitch::new("A#").unwrap();
        let offset = p.offset();
        p.toggle_enharmonic(true);
        assert_eq!(p.note(), "Bb");
        p.toggle_enharmonic(true);
        assert_eq!(p.note(), "A#");
        assert_eq!(p.offset(), offset);
    }

    #[test]
    fn toggle_enharmonic_on_naturals_keeps_the_name() {
        let mut p = Pitch::new("D").unwrap();
        p.toggle_enharmonic(false);
        assert_eq!(p.note(), "D");
    }

    #[test]
    fn toggle_enharmonic_resolves_alias_spellings() {
        let mut p = Pitch::new("Cb").unwrap();
        p.toggle_enharmonic(true);
        assert_eq!(p.note(), "B");

        let mut p = Pitch::new("Fb").unwrap();
        p.toggle_enharmonic(false);
        assert_eq!(p.note(), "E");
    }

    #[test]
    fn has_enharmonic_marks_black_keys() {
        assert!(Pitch::new("C#").unwrap().has_enharmonic());
        assert!(Pitch::new("Bb").unwrap().has_enharmonic());
        assert!(!Pitch::new("E").unwrap().has_enharmonic());
        // "Fb" sits on a white-key class despite the accidental.
        assert!(!Pitch::new("Fb").unwrap().has_enharmonic());
    }

    #[test]
    fn subtraction_is_signed_and_unnormalized() {
        let c4 = Pitch::new("C").unwrap();
        let e5 = Pitch::with_octave("E", 5).unwrap();
        assert_eq!(&e5 - &c4, 16);
        assert_eq!(&c4 - &e5, -16);
    }

    #[test]
    fn parse_round_trips_display() {
        for text in ["C4", "C#4", "Bb3", "Cb-1", "G#10"] {
            let pitch: Pitch = text.parse().unwrap();
            assert_eq!(pitch.to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_junk() {
        for text in ["", "c4", "C", "C#", "H4", "C4x", "C##4", " C4", "é4"] {
            assert!(text.parse::<Pitch>().is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn serde_uses_the_string_form() {
        let pitch = Pitch::with_octave("F#", 3).unwrap();
        let json = serde_json::to_string(&pitch).unwrap();
        assert_eq!(json, "\"F#3\"");
        let back: Pitch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pitch);
        assert!(serde_json::from_str::<Pitch>("\"Q9\"").is_err());
    }
}
