//! Game state and the per-game driver

mod letters;
mod session;
mod state;

pub use letters::LetterStatus;
pub use session::{Game, Outcome, Submission};
pub use state::{GameError, GameState, GuessRecord, MAX_GUESSES};
