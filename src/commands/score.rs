//! One-shot scoring command
//!
//! Scores a single guess against a given answer without playing a game.

use crate::core::{FeedbackRow, Word};
use anyhow::{Context, Result};

/// A scored guess/answer pair
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub feedback: FeedbackRow,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either input is not a valid 5-letter word.
pub fn score_pair(guess: &str, answer: &str) -> Result<ScoreResult> {
    let guess: Word = guess
        .parse()
        .with_context(|| format!("invalid guess '{guess}'"))?;
    let answer: Word = answer
        .parse()
        .with_context(|| format!("invalid answer '{answer}'"))?;

    let feedback = FeedbackRow::evaluate(&guess, &answer);

    Ok(ScoreResult {
        guess,
        answer,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellStatus::{Absent, Correct, Present};

    #[test]
    fn score_valid_pair() {
        let result = score_pair("SPASS", "sassy").unwrap();
        assert_eq!(result.guess.text(), "spass");
        assert_eq!(
            result.feedback.cells(),
            &[Correct, Absent, Present, Correct, Present]
        );
    }

    #[test]
    fn score_rejects_bad_words() {
        let err = score_pair("spa", "sassy").unwrap_err();
        assert!(err.to_string().contains("invalid guess"));

        let err = score_pair("spass", "sa55y").unwrap_err();
        assert!(err.to_string().contains("invalid answer"));
    }
}
