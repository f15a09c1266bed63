//! Core domain types for the puzzle
//!
//! Words and guess scoring. Everything here is pure: no I/O, no randomness,
//! no shared state.

mod feedback;
mod word;

pub use feedback::{CellStatus, FeedbackRow};
pub use word::{WORD_LENGTH, Word, WordError};
