//! Word list loading utilities
//!
//! Reads raw dictionary lines and turns the usable ones into [`Word`]s.

use crate::core::{WORD_LENGTH, Word};
use std::fs;
use std::io;
use std::path::Path;

/// Read every line of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or is not valid UTF-8.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Turn one raw dictionary line into a word, if it qualifies
///
/// A line qualifies when, after trimming, it has exactly five characters, no
/// apostrophe, and only ASCII letters. Case is normalized by [`Word::new`].
///
/// # Examples
/// ```
/// use wordle_game::lexicon::loader::parse_line;
///
/// assert_eq!(parse_line("Grape").unwrap().text(), "grape");
/// assert!(parse_line("isn't").is_none());
/// assert!(parse_line("grapes").is_none());
/// ```
#[must_use]
pub fn parse_line(line: &str) -> Option<Word> {
    let trimmed = line.trim();

    if trimmed.chars().count() != WORD_LENGTH || trimmed.contains('\'') {
        return None;
    }

    Word::new(trimmed).ok()
}
