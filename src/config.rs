//! Session configuration
//!
//! Collects the command-line choices that shape a game: where the word list
//! comes from, an optional fixed answer and an optional RNG seed.

use crate::core::Word;
use crate::game::Game;
use crate::lexicon::Lexicon;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Settings shared by every game of a session
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// Word list file; the bundled list is used when `None`
    pub wordlist: Option<PathBuf>,
    /// Fixed answer for every game, mostly useful for debugging
    pub answer: Option<Word>,
    /// Seed for answer selection; fresh entropy when `None`
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Load the lexicon named by the configuration
    ///
    /// # Errors
    ///
    /// Fails if the word list cannot be read or has no usable words. This is
    /// fatal: no game can start without a lexicon.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        let lexicon = match &self.wordlist {
            Some(path) => Lexicon::from_file(path)
                .with_context(|| format!("failed to load word list {}", path.display()))?,
            None => Lexicon::embedded().context("bundled word list is unusable")?,
        };

        log::info!("lexicon ready with {} words", lexicon.len());
        Ok(lexicon)
    }

    /// Random number generator for answer selection
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Start a new game, honoring a fixed answer if one was configured
    pub fn new_game<'a>(&self, lexicon: &'a Lexicon, rng: &mut StdRng) -> Game<'a> {
        match &self.answer {
            Some(answer) => Game::new(lexicon, answer.clone()),
            None => Game::random(lexicon, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn default_config_uses_embedded_list() {
        let config = GameConfig::default();
        let lexicon = config.load_lexicon().unwrap();
        assert!(lexicon.contains("crane"));
    }

    #[test]
    fn missing_wordlist_is_fatal() {
        let config = GameConfig {
            wordlist: Some(PathBuf::from("no/such/list.txt")),
            ..GameConfig::default()
        };

        let err = config.load_lexicon().unwrap_err();
        assert!(err.to_string().contains("no/such/list.txt"));
    }

    #[test]
    fn empty_wordlist_is_fatal() {
        let path = std::env::temp_dir().join(format!(
            "wordle_game_empty_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "isn't\nab\nlonger\n").unwrap();

        let config = GameConfig {
            wordlist: Some(path.clone()),
            ..GameConfig::default()
        };
        let result = config.load_lexicon();
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }

    #[test]
    fn fixed_answer_is_used() {
        let config = GameConfig {
            answer: Some(Word::new("grape").unwrap()),
            ..GameConfig::default()
        };
        let lexicon = config.load_lexicon().unwrap();
        let mut rng = config.rng();

        let game = config.new_game(&lexicon, &mut rng);
        assert_eq!(game.answer().text(), "grape");
    }

    #[test]
    fn seeded_games_repeat() {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::default()
        };
        let lexicon = config.load_lexicon().unwrap();

        let first = config.new_game(&lexicon, &mut config.rng()).answer().clone();
        let second = config.new_game(&lexicon, &mut config.rng()).answer().clone();
        assert_eq!(first, second);
    }
}
