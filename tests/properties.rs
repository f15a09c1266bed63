// Property tests for scoring and letter aggregation

use proptest::prelude::*;
use wordle_game::core::{CellStatus, FeedbackRow, WORD_LENGTH, Word};
use wordle_game::game::{GameState, LetterStatus};

fn word_strategy() -> impl Strategy<Value = Word> {
    // Small alphabet so duplicates and collisions are common
    "[a-f]{5}".prop_map(|text| Word::new(text).unwrap())
}

fn count(word: &Word, letter: u8) -> usize {
    word.chars().iter().filter(|&&c| c == letter).count()
}

proptest! {
    #[test]
    fn exact_matches_are_correct(guess in word_strategy(), answer in word_strategy()) {
        let row = FeedbackRow::evaluate(&guess, &answer);

        for i in 0..WORD_LENGTH {
            let exact = guess.char_at(i) == answer.char_at(i);
            prop_assert_eq!(row.get(i) == CellStatus::Correct, exact);
            prop_assert_ne!(row.get(i), CellStatus::Unrevealed);
        }
    }

    #[test]
    fn credit_never_exceeds_answer_letters(guess in word_strategy(), answer in word_strategy()) {
        let row = FeedbackRow::evaluate(&guess, &answer);

        for letter in b'a'..=b'f' {
            let credited = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter && row.get(i) != CellStatus::Absent)
                .count();
            let expected = count(&guess, letter).min(count(&answer, letter));
            prop_assert_eq!(credited, expected);
        }
    }

    #[test]
    fn presence_goes_to_leftmost_duplicates(guess in word_strategy(), answer in word_strategy()) {
        let row = FeedbackRow::evaluate(&guess, &answer);

        // Among non-correct cells of one letter, no absent cell precedes a present one
        for letter in b'a'..=b'f' {
            let statuses: Vec<CellStatus> = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == letter && row.get(i) != CellStatus::Correct)
                .map(|i| row.get(i))
                .collect();
            let first_absent = statuses.iter().position(|&s| s == CellStatus::Absent);
            if let Some(pos) = first_absent {
                prop_assert!(statuses[pos..].iter().all(|&s| s == CellStatus::Absent));
            }
        }
    }

    #[test]
    fn letter_status_is_monotone(
        answer in word_strategy(),
        guesses in prop::collection::vec(word_strategy(), 1..=6),
    ) {
        let mut state = GameState::new();
        let mut previous = LetterStatus::new();

        for guess in guesses {
            if state.is_terminal() {
                break;
            }
            let feedback = FeedbackRow::evaluate(&guess, &answer);
            state.record(guess.clone(), feedback).unwrap();

            for (letter, before) in previous.iter() {
                prop_assert!(state.letters().get(letter) >= before);
            }
            previous = state.letters().clone();
        }
    }

    #[test]
    fn letter_status_is_max_over_cells(
        answer in word_strategy(),
        guesses in prop::collection::vec(word_strategy(), 1..=6),
    ) {
        let mut state = GameState::new();
        for guess in guesses {
            if state.is_terminal() {
                break;
            }
            let feedback = FeedbackRow::evaluate(&guess, &answer);
            state.record(guess, feedback).unwrap();
        }

        for letter in LetterStatus::alphabet() {
            let best = state
                .guesses()
                .iter()
                .flat_map(|record| {
                    record
                        .word
                        .chars()
                        .iter()
                        .zip(record.feedback.iter())
                        .filter(|&(&c, _)| char::from(c) == letter)
                        .map(|(_, status)| status)
                        .collect::<Vec<_>>()
                })
                .max()
                .unwrap_or(CellStatus::Unrevealed);
            prop_assert_eq!(state.letters().get(letter), best);
        }
    }

    #[test]
    fn repeated_guess_is_stable(answer in word_strategy(), guess in word_strategy()) {
        let mut state = GameState::new();
        let feedback = FeedbackRow::evaluate(&guess, &answer);
        state.record(guess.clone(), feedback).unwrap();
        let before = state.letters().clone();

        if state.is_terminal() {
            prop_assert!(state.record(guess, feedback).is_err());
            prop_assert_eq!(state.guesses().len(), 1);
        } else {
            state.record(guess, feedback).unwrap();
            prop_assert_eq!(state.letters(), &before);
        }
    }
}
