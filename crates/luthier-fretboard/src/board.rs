//! Fretboard derivation: per-string pitch rows stepped fret by fret.

use serde::Serialize;

use luthier_theory::Pitch;

use crate::error::FretboardError;
use crate::tuning::Tuning;

/// Default fret count for a derived board.
pub const DEFAULT_FRET_COUNT: i32 = 24;

/// Every pitch on a fretted instrument: one row per string, one entry per
/// fret (index = fret number, fret 0 = open string).
///
/// Rows are stored low-to-high, matching the tuning order; the public
/// [`Fretboard::at`] accessor counts from the highest-pitched string
/// instead, matching how players number strings.
///
/// # Examples
/// ```
/// use luthier_fretboard::Fretboard;
///
/// let board = Fretboard::default();
/// // String 1 (highest) fretted at 5 is A4.
/// assert_eq!(board.at(0).unwrap()[5].to_string(), "A4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fretboard {
    tuning: Tuning,
    fret_count: i32,
    board: Vec<Vec<Pitch>>,
}

impl Fretboard {
    /// Derives the full board for a tuning.
    ///
    /// Each string's row is its open pitch stepped up fret by fret, with
    /// the octave number deriving naturally from the target offset.
    /// Fails with [`FretboardError::InvalidFretCount`] for a negative
    /// fret count.
    pub fn new(tuning: Tuning, fret_count: i32) -> Result<Self, FretboardError> {
        if fret_count < 0 {
            return Err(FretboardError::InvalidFretCount { fret_count });
        }
        let mut board = Vec::with_capacity(tuning.strings());
        for open in tuning.pitches() {
            let mut row = Vec::with_capacity(fret_count as usize + 1);
            for fret in 0..=fret_count {
                row.push(open.step(fret, false)?);
            }
            board.push(row);
        }
        Ok(Self {
            tuning,
            fret_count,
            board,
        })
    }

    /// The tuning this board was derived from.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Number of frets (the open string is not counted).
    pub fn fret_count(&self) -> i32 {
        self.fret_count
    }

    /// Number of strings.
    pub fn strings(&self) -> usize {
        self.board.len()
    }

    /// All rows in storage order (lowest-pitched string first).
    pub fn board(&self) -> &[Vec<Pitch>] {
        &self.board
    }

    /// The fret row of a string counted from the highest-pitched string:
    /// index 0 is the highest string, as players number them. Returns
    /// `None` past the last string.
    pub fn at(&self, string_from_high: usize) -> Option<&[Pitch]> {
        let strings = self.board.len();
        if string_from_high >= strings {
            return None;
        }
        Some(&self.board[strings - 1 - string_from_high])
    }
}

impl Default for Fretboard {
    /// Standard tuning with 24 frets.
    fn default() -> Self {
        Self::new(Tuning::standard(), DEFAULT_FRET_COUNT)
            .expect("standard fretboard derivation cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_board_shape() {
        let board = Fretboard::default();
        assert_eq!(board.strings(), 6);
        assert_eq!(board.fret_count(), 24);
        for row in board.board() {
            assert_eq!(row.len(), 25);
        }
    }

    #[test]
    fn fret_zero_is_the_open_string() {
        let board = Fretboard::default();
        for (row, open) in board.board().iter().zip(board.tuning().pitches()) {
            assert_eq!(&row[0], open);
        }
    }

    #[test]
    fn twelfth_fret_is_one_octave_up() {
        let board = Fretboard::default();
        for row in board.board() {
            assert_eq!(row[12].offset() - row[0].offset(), 12);
        }
    }

    #[test]
    fn octaves_derive_naturally_up_the_neck() {
        let board = Fretboard::default();
        // Low E string: fret 8 crosses into octave 3.
        let low_e = &board.board()[0];
        assert_eq!(low_e[7].to_string(), "B2");
        assert_eq!(low_e[8].to_string(), "C3");
    }

    #[test]
    fn string_indexing_counts_from_the_highest_string() {
        let board = Fretboard::default();
        assert_eq!(board.at(0).unwrap()[0].to_string(), "E4");
        assert_eq!(board.at(5).unwrap()[0].to_string(), "E2");
        assert!(board.at(6).is_none());
    }

    #[test]
    fn frets_spell_sharp() {
        let board = Fretboard::default();
        // A string, first fret.
        assert_eq!(board.board()[1][1].to_string(), "A#2");
    }

    #[test]
    fn negative_fret_count_is_rejected() {
        assert_eq!(
            Fretboard::new(Tuning::standard(), -1),
            Err(FretboardError::InvalidFretCount { fret_count: -1 })
        );
    }

    #[test]
    fn zero_fret_board_is_just_the_open_strings() {
        let board = Fretboard::new(Tuning::standard(), 0).unwrap();
        for row in board.board() {
            assert_eq!(row.len(), 1);
        }
    }

    #[test]
    fn alternate_tunings_shift_the_rows() {
        let board = Fretboard::new(Tuning::drop_d(), 12).unwrap();
        assert_eq!(board.board()[0][0].to_string(), "D2");
        assert_eq!(board.at(5).unwrap()[2].to_string(), "E2");
    }
}
