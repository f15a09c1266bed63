//! Best-known status of every letter of the alphabet

use crate::core::{CellStatus, FeedbackRow, Word};
use rustc_hash::FxHashMap;

/// Mapping from letter to the most informative status seen for it
///
/// Letters that never appeared in a guess read as
/// [`CellStatus::Unrevealed`]. Entries only ever move up the
/// `Unrevealed < Absent < Present < Correct` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterStatus {
    statuses: FxHashMap<char, CellStatus>,
}

impl LetterStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The letters tracked by the table, in alphabetical order
    pub fn alphabet() -> impl Iterator<Item = char> {
        'a'..='z'
    }

    /// Current status of a letter (case-insensitive)
    #[must_use]
    pub fn get(&self, letter: char) -> CellStatus {
        self.statuses
            .get(&letter.to_ascii_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// Raise a letter to `status` if that is more informative than what is
    /// already known. Returns whether the entry changed.
    pub fn raise(&mut self, letter: char, status: CellStatus) -> bool {
        let letter = letter.to_ascii_lowercase();
        if status > self.get(letter) {
            self.statuses.insert(letter, status);
            true
        } else {
            false
        }
    }

    /// Fold one scored guess into the table
    pub fn absorb(&mut self, guess: &Word, feedback: &FeedbackRow) {
        for (&ch, status) in guess.chars().iter().zip(feedback.iter()) {
            self.raise(char::from(ch), status);
        }
    }

    /// Letters currently at exactly `status`, alphabetically
    #[must_use]
    pub fn letters_with(&self, status: CellStatus) -> Vec<char> {
        Self::alphabet()
            .filter(|&letter| self.get(letter) == status)
            .collect()
    }

    /// Every letter with its status, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (char, CellStatus)> + '_ {
        Self::alphabet().map(|letter| (letter, self.get(letter)))
    }
}
