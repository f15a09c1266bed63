//! Word-guessing puzzle
//!
//! A hidden 5-letter word is compared against up to six guesses; each guess
//! is scored letter by letter as correct, present elsewhere or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{FeedbackRow, Word};
//! use wordle_game::game::GameState;
//! use wordle_game::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::build(["apple", "grape", "berry"]).unwrap();
//! assert!(lexicon.contains("Apple"));
//!
//! let answer = Word::new("grape").unwrap();
//! let guess = Word::new("apple").unwrap();
//! let feedback = FeedbackRow::evaluate(&guess, &answer);
//! assert_eq!(feedback.to_emoji(), "🟨🟨⬛⬛🟩");
//!
//! let mut state = GameState::new();
//! state.record(guess, feedback).unwrap();
//! assert!(!state.is_terminal());
//! ```

// Core domain types
pub mod core;

// Dictionary of valid words
pub mod lexicon;

// Game state and driver
pub mod game;

// Session configuration
pub mod config;

// Logger setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
