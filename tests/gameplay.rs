// End-to-end tests for the puzzle
// These drive the public API the way the terminal front ends do

use std::io::Cursor;
use wordle_game::commands::run_simple;
use wordle_game::core::CellStatus::{Absent, Correct, Present, Unrevealed};
use wordle_game::core::{FeedbackRow, Word};
use wordle_game::game::{Game, GameError, GameState, MAX_GUESSES, Outcome, Submission};
use wordle_game::lexicon::Lexicon;

fn fruit_lexicon() -> Lexicon {
    Lexicon::build(["APPLE", "GRAPE", "BERRY", "melon", "lemon", "peach", "can't"]).unwrap()
}

#[test]
fn test_apple_then_grape() {
    let lexicon = fruit_lexicon();
    let answer = lexicon.lookup("grape").unwrap().clone();
    let mut game = Game::new(&lexicon, answer);

    let first = game.submit("APPLE").unwrap();
    assert_eq!(
        first,
        Submission::Scored(FeedbackRow::new([Present, Present, Absent, Absent, Correct]))
    );
    // Only one of the two P's can be credited
    let letters = game.state().letters();
    assert_eq!(letters.get('p'), Present);
    assert_eq!(letters.get('l'), Absent);
    assert!(!game.state().is_terminal());

    let second = game.submit("GRAPE").unwrap();
    assert_eq!(second, Submission::Scored(FeedbackRow::SOLVED));
    assert!(game.state().is_won());
    assert!(game.state().is_terminal());
    assert_eq!(game.outcome(), Some(Outcome::Won { guesses: 2 }));
    assert_eq!(game.state().letters().get('g'), Correct);
    assert_eq!(game.state().letters().get('p'), Correct);
}

#[test]
fn test_invalid_guesses_do_not_mutate_state() {
    let lexicon = fruit_lexicon();
    let mut game = Game::new(&lexicon, Word::new("grape").unwrap());

    assert_eq!(game.submit("pear").unwrap(), Submission::WrongLength(4));
    assert_eq!(
        game.submit("mango").unwrap(),
        Submission::NotInWordList("mango".to_string())
    );
    assert_eq!(
        game.submit("can't").unwrap(),
        Submission::NotInWordList("can't".to_string())
    );

    assert!(game.state().guesses().is_empty());
    assert!(game.state().letters().iter().all(|(_, s)| s == Unrevealed));
}

#[test]
fn test_game_state_rejects_recording_past_limit() {
    let guess = Word::new("berry").unwrap();
    let answer = Word::new("grape").unwrap();
    let feedback = FeedbackRow::evaluate(&guess, &answer);

    let mut state = GameState::new();
    for _ in 0..MAX_GUESSES {
        state.record(guess.clone(), feedback).unwrap();
    }
    let letters = state.letters().clone();

    assert_eq!(
        state.record(guess, feedback),
        Err(GameError::OutOfGuesses(MAX_GUESSES))
    );
    assert_eq!(state.guesses().len(), MAX_GUESSES);
    assert_eq!(state.letters(), &letters);
}

#[test]
fn test_duplicate_letter_regression() {
    let guess = Word::new("spass").unwrap();
    let answer = Word::new("sassy").unwrap();
    let row = FeedbackRow::evaluate(&guess, &answer);

    assert_eq!(row.cells(), &[Correct, Absent, Present, Correct, Present]);
    assert_eq!(row.to_emoji(), "🟩⬛🟨🟩🟨");
}

#[test]
fn test_simple_mode_full_game() {
    colored::control::set_override(false);
    let lexicon = fruit_lexicon();
    let mut game = Game::new(&lexicon, Word::new("melon").unwrap());
    let mut out = Vec::new();

    let input = "lemons\nlemon\nmelon\n";
    let outcome = run_simple(&mut game, Cursor::new(input), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(outcome, Some(Outcome::Won { guesses: 2 }));
    assert!(text.contains("Not a 5-letter word"));
    assert!(text.contains("🟨🟩🟨🟩🟩\tL E M O N"));
    assert!(text.contains("Letters at correct spot: E, N, O"));
    assert!(text.contains("Nice! You found the word MELON in 2 tries!"));
}

#[test]
fn test_embedded_lexicon_game() {
    let lexicon = Lexicon::embedded().unwrap();
    let mut game = Game::new(&lexicon, Word::new("crane").unwrap());

    let Submission::Scored(row) = game.submit("snake").unwrap() else {
        panic!("snake should be in the bundled list");
    };
    assert_eq!(row.cells(), &[Absent, Present, Correct, Absent, Correct]);
}
