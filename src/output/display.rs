//! Rendering of game state for the line-based mode

use super::formatters::{blank_row, letter_list, spaced_word, status_label, tries};
use crate::commands::ScoreResult;
use crate::core::{CellStatus, WORD_LENGTH};
use crate::game::{Game, GameState, LetterStatus, MAX_GUESSES, Outcome};
use colored::{ColoredString, Colorize};

/// Letter groups in the order they are listed, most informative first
const SUMMARY_ORDER: [CellStatus; 4] = [
    CellStatus::Correct,
    CellStatus::Present,
    CellStatus::Absent,
    CellStatus::Unrevealed,
];

fn paint(text: &str, status: CellStatus) -> ColoredString {
    match status {
        CellStatus::Correct => text.bright_green().bold(),
        CellStatus::Present => text.bright_yellow().bold(),
        CellStatus::Absent => text.bright_black(),
        CellStatus::Unrevealed => text.normal(),
    }
}

/// Rules shown before the first guess
#[must_use]
pub fn intro() -> String {
    let lines = [
        format!("Guess the word in {MAX_GUESSES} {}.", tries(MAX_GUESSES)),
        format!(
            "Each guess must be a valid {WORD_LENGTH}-letter word. Hit the enter button to submit."
        ),
        "After each guess, the color of the tiles will change to show how close your guess was to the word."
            .to_string(),
        format!(
            "{} means that the letter is in the word and at the correct spot.",
            CellStatus::Correct.tile()
        ),
        format!(
            "{} means that the letter is in the word but NOT at the correct spot.",
            CellStatus::Present.tile()
        ),
        format!(
            "{} means that the letter is not in the word at all.",
            CellStatus::Absent.tile()
        ),
    ];

    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// The full grid: one line per allowed guess, blank tiles for unused rows
#[must_use]
pub fn grid(state: &GameState) -> String {
    state
        .rows()
        .map(|row| match row {
            Some(record) => {
                let letters: Vec<String> = spaced_word(&record.word)
                    .split(' ')
                    .zip(record.feedback.iter())
                    .map(|(letter, status)| paint(letter, status).to_string())
                    .collect();
                format!("{}\t{}\n", record.feedback.to_emoji(), letters.join(" "))
            }
            None => format!("{}\n", blank_row()),
        })
        .collect()
}

/// One line per letter group, e.g. "Letters not in word: B, L"
#[must_use]
pub fn letter_summary(letters: &LetterStatus) -> String {
    SUMMARY_ORDER
        .iter()
        .map(|&status| {
            let group = letters.letters_with(status);
            let listed = letter_list(&group);
            let listed = if group.is_empty() {
                listed.italic()
            } else {
                paint(&listed, status)
            };
            format!("{}: {listed}\n", status_label(status))
        })
        .collect()
}

/// End-of-game message, or `None` while the game is running
#[must_use]
pub fn outcome_message(game: &Game) -> Option<String> {
    let answer = game.answer().text().to_uppercase();

    match game.outcome()? {
        Outcome::Won { guesses } => Some(format!(
            "{} You found the word {} in {guesses} {}!",
            "Nice!".bright_green().bold(),
            answer.bright_green().bold(),
            tries(guesses)
        )),
        Outcome::Lost => Some(format!(
            "{} The word was {}",
            "Game over.".red().bold(),
            answer.bright_yellow().bold()
        )),
    }
}

/// Print the result of the `score` command
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "{}  {} vs {}",
        result.feedback.to_emoji(),
        result.guess.text().to_uppercase().bold(),
        result.answer.text().to_uppercase()
    );

    for (i, status) in result.feedback.iter().enumerate() {
        let letter = char::from(result.guess.char_at(i)).to_ascii_uppercase();
        println!(
            "  {}: {} {}",
            i + 1,
            paint(&letter.to_string(), status),
            format!("{status:?}").to_lowercase()
        );
    }
}
