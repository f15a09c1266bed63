//! One game from the driver's point of view
//!
//! A [`Game`] ties a lexicon, a hidden answer and a [`GameState`] together:
//! raw player input goes in, feedback comes out.

use super::state::{GameError, GameState};
use crate::core::{FeedbackRow, WORD_LENGTH, Word};
use crate::lexicon::Lexicon;
use rand::Rng;

/// Result of submitting raw player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The guess was valid, scored and recorded
    Scored(FeedbackRow),
    /// Input does not have the right number of characters
    WrongLength(usize),
    /// Input has the right length but is not a known word
    NotInWordList(String),
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Lost,
}

/// A single game against a fixed answer
#[derive(Debug, Clone)]
pub struct Game<'a> {
    lexicon: &'a Lexicon,
    answer: Word,
    state: GameState,
}

impl<'a> Game<'a> {
    /// Start a game with a known answer
    #[must_use]
    pub fn new(lexicon: &'a Lexicon, answer: Word) -> Self {
        if !lexicon.contains(answer.text()) {
            log::warn!("answer {answer} is not in the word list");
        }
        Self {
            lexicon,
            answer,
            state: GameState::new(),
        }
    }

    /// Start a game with an answer drawn from the lexicon
    pub fn random<R: Rng + ?Sized>(lexicon: &'a Lexicon, rng: &mut R) -> Self {
        let answer = lexicon.choose_answer(rng).clone();
        log::debug!("chose answer {answer}");
        Self::new(lexicon, answer)
    }

    /// Validate, score and record one raw guess
    ///
    /// Input of the wrong length or outside the word list is reported back
    /// without touching the game state, so the caller can simply re-prompt.
    ///
    /// # Errors
    ///
    /// Returns a [`GameError`] if the game is already over.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::game::{Game, Submission};
    /// use wordle_game::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::build(["apple", "grape", "berry"]).unwrap();
    /// let mut game = Game::new(&lexicon, Word::new("grape").unwrap());
    ///
    /// assert_eq!(game.submit("grap").unwrap(), Submission::WrongLength(4));
    /// assert!(matches!(game.submit("GRAPE").unwrap(), Submission::Scored(_)));
    /// assert!(game.state().is_won());
    /// ```
    pub fn submit(&mut self, raw: &str) -> Result<Submission, GameError> {
        self.state.ensure_open()?;

        let candidate = raw.trim();
        let len = candidate.chars().count();
        if len != WORD_LENGTH {
            log::debug!("rejected {candidate:?}: {len} characters");
            return Ok(Submission::WrongLength(len));
        }

        let Some(guess) = self.lexicon.lookup(candidate) else {
            log::debug!("rejected {candidate:?}: not in word list");
            return Ok(Submission::NotInWordList(candidate.to_lowercase()));
        };

        let feedback = FeedbackRow::evaluate(guess, &self.answer);
        self.state.record(guess.clone(), feedback)?;
        Ok(Submission::Scored(feedback))
    }

    /// How the game ended, or `None` while it is still running
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.state.is_won() {
            Some(Outcome::Won {
                guesses: self.state.guesses().len(),
            })
        } else if self.state.is_terminal() {
            Some(Outcome::Lost)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}
