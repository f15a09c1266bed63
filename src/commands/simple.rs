//! Line-based interactive mode
//!
//! Prompts for guesses on one stream and prints the grid and letter summary
//! to another, until the game ends or input runs out.

use crate::core::WORD_LENGTH;
use crate::game::{Game, Outcome, Submission};
use crate::output::{grid, intro, letter_summary, outcome_message};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Play one game reading guesses from `input` and writing to `out`
///
/// Returns how the game ended, or `None` if input ran out first.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game,
    mut input: R,
    mut out: W,
) -> Result<Option<Outcome>> {
    writeln!(out, "{}", intro())?;

    while game.outcome().is_none() {
        write!(out, "Enter a {WORD_LENGTH}-letter word: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            log::info!("input closed before the game ended");
            return Ok(None);
        }

        match game.submit(&line)? {
            Submission::Scored(_) => {
                writeln!(out)?;
                writeln!(out, "{}", grid(game.state()))?;
                writeln!(out, "{}", letter_summary(game.state().letters()))?;
            }
            Submission::WrongLength(_) => {
                writeln!(out, "{}", format!("Not a {WORD_LENGTH}-letter word").red())?;
            }
            Submission::NotInWordList(word) => {
                writeln!(
                    out,
                    "{}",
                    format!("{} not in word list", word.to_uppercase()).red()
                )?;
            }
        }
    }

    if let Some(message) = outcome_message(game) {
        writeln!(out, "{message}")?;
    }

    Ok(game.outcome())
}
