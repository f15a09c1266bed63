//! Accumulated state of one puzzle
//!
//! [`GameState`] is the only mutable record of a game: the guesses made so
//! far, their feedback rows and the best-known status of every letter.

use super::letters::LetterStatus;
use crate::core::{FeedbackRow, Word};
use thiserror::Error;

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

/// A guess together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub feedback: FeedbackRow,
}

/// Misuse of a game that has already ended
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("the puzzle has already been solved")]
    AlreadyWon,

    #[error("all {0} guesses have already been used")]
    OutOfGuesses(usize),
}

/// Guesses made so far and what they revealed
#[derive(Debug, Clone)]
pub struct GameState {
    guesses: Vec<GuessRecord>,
    letters: LetterStatus,
    max_guesses: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create an empty game allowing [`MAX_GUESSES`] guesses
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_guesses(MAX_GUESSES)
    }

    /// Create an empty game with a custom guess limit (at least one)
    #[must_use]
    pub fn with_max_guesses(max_guesses: usize) -> Self {
        let max_guesses = max_guesses.max(1);
        Self {
            guesses: Vec::with_capacity(max_guesses),
            letters: LetterStatus::new(),
            max_guesses,
        }
    }

    /// Record a scored guess
    ///
    /// Appends the guess and raises each of its letters in the letter table
    /// to the status of its cell, keeping whichever is more informative.
    ///
    /// # Errors
    ///
    /// Refuses to record anything once the game is terminal:
    /// [`GameError::AlreadyWon`] after a solved row,
    /// [`GameError::OutOfGuesses`] when the limit is reached.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{FeedbackRow, Word};
    /// use wordle_game::game::GameState;
    ///
    /// let answer = Word::new("grape").unwrap();
    /// let mut state = GameState::new();
    ///
    /// let feedback = FeedbackRow::evaluate(&answer, &answer);
    /// state.record(answer.clone(), feedback).unwrap();
    ///
    /// assert!(state.is_won());
    /// assert!(state.record(answer, feedback).is_err());
    /// ```
    pub fn record(&mut self, guess: Word, feedback: FeedbackRow) -> Result<(), GameError> {
        if let Err(err) = self.ensure_open() {
            log::warn!("ignoring guess {guess}: {err}");
            return Err(err);
        }

        self.letters.absorb(&guess, &feedback);
        log::debug!(
            "guess {}/{}: {guess} {feedback}",
            self.guesses.len() + 1,
            self.max_guesses
        );
        self.guesses.push(GuessRecord {
            word: guess,
            feedback,
        });

        Ok(())
    }

    /// Check that another guess may still be recorded
    ///
    /// # Errors
    ///
    /// Returns the [`GameError`] that [`record`](Self::record) would fail with.
    pub fn ensure_open(&self) -> Result<(), GameError> {
        if self.is_won() {
            Err(GameError::AlreadyWon)
        } else if self.guesses.len() >= self.max_guesses {
            Err(GameError::OutOfGuesses(self.max_guesses))
        } else {
            Ok(())
        }
    }

    /// True once the guess limit is reached or the last guess was solved
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.guesses.len() >= self.max_guesses || self.is_won()
    }

    /// True if the last recorded guess was all correct
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.last()
            .is_some_and(|record| record.feedback.is_all_correct())
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.guesses.last()
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStatus {
        &self.letters
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses - self.guesses.len()
    }

    /// One entry per grid row; rows without a guess yet are `None`
    pub fn rows(&self) -> impl Iterator<Item = Option<&GuessRecord>> + '_ {
        (0..self.max_guesses).map(|row| self.guesses.get(row))
    }
}
