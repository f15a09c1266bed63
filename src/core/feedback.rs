//! Guess scoring and per-cell feedback
//!
//! A [`FeedbackRow`] holds one [`CellStatus`] per letter of a guess. Rows are
//! produced by [`FeedbackRow::evaluate`] and never change afterwards.

use super::word::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single cell of the grid
///
/// Variants are declared from least to most informative, so the derived
/// `Ord` gives `Correct > Present > Absent > Unrevealed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CellStatus {
    /// No information yet
    #[default]
    Unrevealed,
    /// Letter is not in the answer (or all its occurrences are already credited)
    Absent,
    /// Letter is in the answer at a different position
    Present,
    /// Letter is in the answer at this position
    Correct,
}

impl CellStatus {
    /// Emoji tile for this status
    #[must_use]
    pub const fn tile(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unrevealed => '⬜',
        }
    }
}

/// Remaining count of each answer letter that can still be credited
///
/// One slot is consumed each time a guess position is credited as
/// `Correct` or `Present`.
#[derive(Debug, Clone, Default)]
pub(crate) struct LetterPool {
    counts: FxHashMap<u8, u8>,
}

impl LetterPool {
    pub(crate) fn from_word(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Consume one occurrence of `letter`, returning whether one was left
    pub(crate) fn take(&mut self, letter: u8) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self, letter: u8) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }
}

/// Feedback for one guess, one status per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([CellStatus; WORD_LENGTH]);

impl FeedbackRow {
    /// All cells correct
    pub const SOLVED: Self = Self([CellStatus::Correct; WORD_LENGTH]);

    /// A row for a guess that has not been made yet
    pub const BLANK: Self = Self([CellStatus::Unrevealed; WORD_LENGTH]);

    #[must_use]
    pub const fn new(cells: [CellStatus; WORD_LENGTH]) -> Self {
        Self(cells)
    }

    /// Score `guess` against the hidden `answer`
    ///
    /// Exact matches are credited first and reserve their letter. Remaining
    /// positions are then credited left to right while the answer still has
    /// an unclaimed occurrence of the letter; everything else is absent. A
    /// position resolved as correct never touches the pool again, so a later
    /// duplicate keeps the credit it is entitled to.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{CellStatus::*, FeedbackRow, Word};
    ///
    /// let guess = Word::new("spass").unwrap();
    /// let answer = Word::new("sassy").unwrap();
    ///
    /// let row = FeedbackRow::evaluate(&guess, &answer);
    /// assert_eq!(row.cells(), &[Correct, Absent, Present, Correct, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, answer: &Word) -> Self {
        let mut cells = [CellStatus::Unrevealed; WORD_LENGTH];
        let mut pool = LetterPool::from_word(answer);

        // Exact matches reserve their letters before anything else
        for (i, cell) in cells.iter_mut().enumerate() {
            if guess.char_at(i) == answer.char_at(i) {
                *cell = CellStatus::Correct;
                pool.take(guess.char_at(i));
            }
        }

        for (i, cell) in cells.iter_mut().enumerate() {
            if *cell == CellStatus::Correct {
                continue;
            }

            *cell = if pool.take(guess.char_at(i)) {
                CellStatus::Present
            } else {
                CellStatus::Absent
            };
        }

        Self(cells)
    }

    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[CellStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> CellStatus {
        self.0[position]
    }

    pub fn iter(&self) -> impl Iterator<Item = CellStatus> + '_ {
        self.0.iter().copied()
    }

    /// Check if every cell is correct
    #[inline]
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Number of cells with the given status
    #[must_use]
    pub fn count(&self, status: CellStatus) -> usize {
        self.iter().filter(|&cell| cell == status).count()
    }

    /// Convert the row to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.iter().map(CellStatus::tile).collect()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
