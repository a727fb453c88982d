//! Scale derivation: modal step patterns, diatonic letter spelling, and
//! triad enumeration.
//!
//! A [`ScaleSequence`] is computed once at construction by walking the
//! step pattern from the root with `reset_octave` set, correcting each
//! intermediate degree's spelling so the seven natural letters are used
//! exactly once per octave.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::pitch::Pitch;
use crate::pitch_class::{letters_starting_at, NATURAL_LETTERS};

/// The closed catalog of modal step patterns.
///
/// `Major` and `Ionian` share a pattern, as do `Minor` and `Aeolian`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Minor,
    Locrian,
}

impl Mode {
    /// Semitone steps between consecutive degrees.
    pub fn steps(&self) -> &'static [i32; 7] {
        match self {
            Mode::Major | Mode::Ionian => &[2, 2, 1, 2, 2, 2, 1],
            Mode::Dorian => &[2, 1, 2, 2, 2, 1, 2],
            Mode::Phrygian => &[1, 2, 2, 2, 1, 2, 2],
            Mode::Lydian => &[2, 2, 2, 1, 2, 2, 1],
            Mode::Mixolydian => &[2, 2, 1, 2, 2, 1, 2],
            Mode::Aeolian | Mode::Minor => &[2, 1, 2, 2, 1, 2, 2],
            Mode::Locrian => &[1, 2, 2, 1, 2, 2, 2],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Major => "major",
            Mode::Ionian => "ionian",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "aeolian",
            Mode::Minor => "minor",
            Mode::Locrian => "locrian",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Mode {
    type Err = TheoryError;

    /// Parses a mode name, ASCII-case-insensitively.
    ///
    /// Fails with [`TheoryError::UnknownScaleName`] for names outside the
    /// catalog.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.to_ascii_uppercase().as_str() {
            "MAJOR" => Mode::Major,
            "IONIAN" => Mode::Ionian,
            "DORIAN" => Mode::Dorian,
            "PHRYGIAN" => Mode::Phrygian,
            "LYDIAN" => Mode::Lydian,
            "MIXOLYDIAN" => Mode::Mixolydian,
            "AEOLIAN" => Mode::Aeolian,
            "MINOR" => Mode::Minor,
            "LOCRIAN" => Mode::Locrian,
            _ => {
                return Err(TheoryError::UnknownScaleName {
                    name: s.to_string(),
                })
            }
        };
        Ok(mode)
    }
}

/// A scale realized from a root pitch: one pitch per degree plus the
/// octave degree, with letter-correct enharmonic spelling.
///
/// # Examples
/// ```
/// use luthier_theory::{Mode, Pitch, ScaleSequence};
///
/// let g_major = ScaleSequence::new(Pitch::new("G").unwrap(), Mode::Major).unwrap();
/// assert_eq!(
///     g_major.tones(),
///     ["G", "A", "B", "C", "D", "E", "F#", "G"],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleSequence {
    root: Pitch,
    steps: Vec<i32>,
    pitches: Vec<Pitch>,
}

impl ScaleSequence {
    /// Derives the scale for a catalog mode.
    pub fn new(root: Pitch, mode: Mode) -> Result<Self, TheoryError> {
        Self::from_steps(root, mode.steps().to_vec())
    }

    /// Derives the scale for a mode given by name.
    ///
    /// Fails with [`TheoryError::UnknownScaleName`] if `name` is not in
    /// the catalog.
    pub fn from_name(root: Pitch, name: &str) -> Result<Self, TheoryError> {
        Self::new(root, name.parse()?)
    }

    /// Derives the scale for an explicit step pattern.
    ///
    /// Each degree is the previous pitch stepped by the pattern entry with
    /// the octave number held at the root's. Every degree but the final
    /// one is re-spelled (sharp-biased) when its letter strays from the
    /// natural cycle rotated to the root's letter; for a seven-step
    /// pattern this lands each letter exactly once.
    ///
    /// Negative custom steps can fall below C0 and surface
    /// [`TheoryError::BelowRangeFloor`].
    pub fn from_steps(root: Pitch, steps: Vec<i32>) -> Result<Self, TheoryError> {
        let letters = letters_starting_at(root.letter());
        let mut pitches = Vec::with_capacity(steps.len() + 1);
        pitches.push(root.clone());
        for (degree, &step) in steps.iter().enumerate() {
            let mut next = pitches[degree].step(step, true)?;
            let is_final = degree + 1 == steps.len();
            if !is_final {
                let expected = letters[(degree + 1) % NATURAL_LETTERS.len()];
                if next.letter() != expected {
                    next.toggle_enharmonic(true);
                }
            }
            pitches.push(next);
        }
        Ok(Self {
            root,
            steps,
            pitches,
        })
    }

    /// The root pitch (always the first entry of [`ScaleSequence::pitches`]).
    pub fn root(&self) -> &Pitch {
        &self.root
    }

    /// The resolved step pattern.
    pub fn steps(&self) -> &[i32] {
        &self.steps
    }

    /// The derived pitches, one per degree plus the octave degree.
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Number of derived pitches (pattern length + 1).
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Always false in practice: even an empty pattern keeps the root.
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    /// The final note names, in degree order.
    pub fn tones(&self) -> Vec<&'static str> {
        self.pitches.iter().map(|p| p.note()).collect()
    }

    /// Iterates the triad stacked on every degree.
    ///
    /// Lazy and restartable: each call starts a fresh pass. Member indices
    /// wrap modulo the stored pitch list (octave degree included), so the
    /// upper members of the last triads fold back to the list head.
    pub fn triads(&self) -> impl Iterator<Item = [&Pitch; 3]> + '_ {
        let n = self.pitches.len();
        (0..n.saturating_sub(1)).map(move |i| {
            [
                &self.pitches[i],
                &self.pitches[(i + 2) % n],
                &self.pitches[(i + 4) % n],
            ]
        })
    }

    /// Iterates the seventh chord (triad plus one more stacked third) on
    /// every degree, wrapping like [`ScaleSequence::triads`].
    pub fn extended_triads(&self) -> impl Iterator<Item = [&Pitch; 4]> + '_ {
        let n = self.pitches.len();
        (0..n.saturating_sub(1)).map(move |i| {
            [
                &self.pitches[i],
                &self.pitches[(i + 2) % n],
                &self.pitches[(i + 4) % n],
                &self.pitches[(i + 6) % n],
            ]
        })
    }
}
