//! Pitch-class tables for the 12-tone equal-temperament octave.
//!
//! Process-wide constant data: the note-name table, per-class enharmonic
//! spelling pairs, and the natural-letter cycle that drives diatonic scale
//! spelling. Lookups are `const` arrays and scans, initialized at compile
//! time; nothing here holds resources or needs teardown.

use crate::error::TheoryError;

/// Number of semitones in one octave.
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// Absolute offset of A4, counted in semitones from C0.
pub const A4_OFFSET: i32 = 57;

/// Reference tuning frequency of A4 in Hz.
pub const A4_FREQ: f64 = 440.0;

/// The natural-letter cycle.
pub const NATURAL_LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// Every accepted note name paired with its pitch class (0-11).
///
/// Enharmonic synonyms map to the same class; the set is closed, and the
/// entries double as the canonical `&'static str` tokens stored in
/// [`crate::Pitch`].
const NAME_TABLE: [(&str, u8); 21] = [
    ("C", 0),
    ("B#", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("Fb", 4),
    ("F", 5),
    ("E#", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
    ("Cb", 11),
];

/// Sharp and flat spellings for each pitch class (index = class).
///
/// White-key classes carry the same name in both slots.
const CLASS_SPELLINGS: [(&str, &str); 12] = [
    ("C", "C"),
    ("C#", "Db"),
    ("D", "D"),
    ("D#", "Eb"),
    ("E", "E"),
    ("F", "F"),
    ("F#", "Gb"),
    ("G", "G"),
    ("G#", "Ab"),
    ("A", "A"),
    ("A#", "Bb"),
    ("B", "B"),
];

/// Resolve a note name to its canonical static token and pitch class.
pub(crate) fn lookup(name: &str) -> Result<(&'static str, u8), TheoryError> {
    NAME_TABLE
        .iter()
        .find(|(token, _)| *token == name)
        .map(|(token, class)| (*token, *class))
        .ok_or_else(|| TheoryError::InvalidNote {
            name: name.to_string(),
        })
}

/// Look up the pitch class (0-11) for a note name.
///
/// # Examples
/// ```
/// use luthier_theory::pitch_class::class_of;
///
/// assert_eq!(class_of("C#").unwrap(), 1);
/// assert_eq!(class_of("Db").unwrap(), 1);
/// assert!(class_of("H").is_err());
/// ```
pub fn class_of(name: &str) -> Result<u8, TheoryError> {
    lookup(name).map(|(_, class)| class)
}

/// The sharp or flat spelling of a pitch class.
///
/// Total over any input: the class is reduced modulo 12.
pub fn spelling_of(class: u8, prefer_sharp: bool) -> &'static str {
    let (sharp, flat) = spellings_of(class);
    if prefer_sharp {
        sharp
    } else {
        flat
    }
}

/// Both spellings of a pitch class as a (sharp, flat) pair.
pub fn spellings_of(class: u8) -> (&'static str, &'static str) {
    CLASS_SPELLINGS[(class % SEMITONES_PER_OCTAVE as u8) as usize]
}

/// The natural-letter cycle rotated to begin at `letter`.
///
/// Drives diatonic spelling: a seven-degree scale rooted on `letter` must
/// visit these letters in order, one per degree. Letters outside the cycle
/// rotate from 'C'.
///
/// # Examples
/// ```
/// use luthier_theory::pitch_class::letters_starting_at;
///
/// assert_eq!(letters_starting_at('G'), ['G', 'A', 'B', 'C', 'D', 'E', 'F']);
/// ```
pub fn letters_starting_at(letter: char) -> [char; 7] {
    let start = NATURAL_LETTERS
        .iter()
        .position(|&l| l == letter)
        .unwrap_or(0);
    std::array::from_fn(|i| NATURAL_LETTERS[(start + i) % NATURAL_LETTERS.len()])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_spelling_resolves_to_its_own_class() {
        for class in 0..12u8 {
            let (sharp, flat) = spellings_of(class);
            assert_eq!(class_of(sharp).unwrap(), class, "sharp spelling {sharp}");
            assert_eq!(class_of(flat).unwrap(), class, "flat spelling {flat}");
        }
    }

    #[test]
    fn enharmonic_synonyms_share_a_class() {
        assert_eq!(class_of("C#").unwrap(), class_of("Db").unwrap());
        assert_eq!(class_of("B#").unwrap(), class_of("C").unwrap());
        assert_eq!(class_of("E#").unwrap(), class_of("F").unwrap());
        assert_eq!(class_of("Cb").unwrap(), class_of("B").unwrap());
        assert_eq!(class_of("Fb").unwrap(), class_of("E").unwrap());
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["H", "c", "C##", "", "Do"] {
            assert_eq!(
                class_of(name),
                Err(TheoryError::InvalidNote {
                    name: name.to_string()
                })
            );
        }
    }

    #[test]
    fn letter_rotation_wraps_the_cycle() {
        assert_eq!(letters_starting_at('C'), NATURAL_LETTERS);
        assert_eq!(letters_starting_at('F'), ['F', 'G', 'A', 'B', 'C', 'D', 'E']);
        assert_eq!(letters_starting_at('B'), ['B', 'C', 'D', 'E', 'F', 'G', 'A']);
    }

    #[test]
    fn spelling_prefers_requested_accidental() {
        assert_eq!(spelling_of(10, true), "A#");
        assert_eq!(spelling_of(10, false), "Bb");
        assert_eq!(spelling_of(7, true), "G");
        assert_eq!(spelling_of(7, false), "G");
    }
}
