//! Formatting utilities for terminal output

use crate::core::{CellStatus, WORD_LENGTH, Word};

/// Placeholder shown when a letter group is empty
pub const NONE_YET: &str = "none right now";

/// Tiles for a grid row that has no guess yet
#[must_use]
pub fn blank_row() -> String {
    CellStatus::Unrevealed.tile().to_string().repeat(WORD_LENGTH)
}

/// Uppercase a word and space its letters: "grape" -> "G R A P E"
#[must_use]
pub fn spaced_word(word: &Word) -> String {
    word.text()
        .chars()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Join letters as "A, B, C", or the placeholder when there are none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return NONE_YET.to_string();
    }

    letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Heading for a group of letters in the letter summary
#[must_use]
pub const fn status_label(status: CellStatus) -> &'static str {
    match status {
        CellStatus::Correct => "Letters at correct spot",
        CellStatus::Present => "Letters in word but not at correct spot",
        CellStatus::Absent => "Letters not in word",
        CellStatus::Unrevealed => "Unused letters",
    }
}

/// "try" for one, "tries" otherwise
#[must_use]
pub const fn tries(count: usize) -> &'static str {
    if count == 1 { "try" } else { "tries" }
}
