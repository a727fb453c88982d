//! Guitar tunings: ordered open-string pitches, low to high.

use serde::Serialize;

use luthier_theory::Pitch;

/// An ordered set of open-string pitches, lowest-pitched string first.
///
/// # Examples
/// ```
/// use luthier_fretboard::Tuning;
///
/// let standard = Tuning::standard();
/// assert_eq!(standard.strings(), 6);
/// assert_eq!(standard.pitches()[0].to_string(), "E2");
/// assert_eq!(standard.pitches()[5].to_string(), "E4");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tuning(Vec<Pitch>);

impl Tuning {
    /// Creates a tuning from open-string pitches, lowest first.
    pub fn new(pitches: Vec<Pitch>) -> Self {
        Self(pitches)
    }

    /// Standard six-string tuning: E2 A2 D3 G3 B3 E4.
    pub fn standard() -> Self {
        Self::from_spellings(&[(4, 2), (9, 2), (2, 3), (7, 3), (11, 3), (4, 4)])
    }

    /// Drop D: standard with the low string down a whole step.
    pub fn drop_d() -> Self {
        Self::from_spellings(&[(2, 2), (9, 2), (2, 3), (7, 3), (11, 3), (4, 4)])
    }

    /// Open G: D2 G2 D3 G3 B3 D4.
    pub fn open_g() -> Self {
        Self::from_spellings(&[(2, 2), (7, 2), (2, 3), (7, 3), (11, 3), (2, 4)])
    }

    /// DADGAD: D2 A2 D3 G3 A3 D4.
    pub fn dadgad() -> Self {
        Self::from_spellings(&[(2, 2), (9, 2), (2, 3), (7, 3), (9, 3), (2, 4)])
    }

    fn from_spellings(classes: &[(u8, i32)]) -> Self {
        Self(
            classes
                .iter()
                .map(|&(class, octave)| Pitch::from_spelling(class, octave, true))
                .collect(),
        )
    }

    /// The open-string pitches, lowest first.
    pub fn pitches(&self) -> &[Pitch] {
        &self.0
    }

    /// Number of strings.
    pub fn strings(&self) -> usize {
        self.0.len()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Pitch>> for Tuning {
    fn from(pitches: Vec<Pitch>) -> Self {
        Self::new(pitches)
    }
}
