//! The dictionary of valid words
//!
//! A [`Lexicon`] is built once from raw dictionary lines and is immutable
//! afterwards. It answers membership queries for guesses and supplies the
//! hidden answer.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while building a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Nothing usable was left after filtering; no answer can be chosen
    #[error("the word list contains no usable 5-letter words")]
    Empty,

    #[error("could not read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Sorted, deduplicated collection of valid words
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
}

impl Lexicon {
    /// Build a lexicon from raw dictionary lines
    ///
    /// Lines that are not five letters long, contain an apostrophe, or hold
    /// anything but ASCII letters are dropped silently.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if no line qualifies.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::lexicon::Lexicon;
    ///
    /// let lexicon = Lexicon::build(["Grape", "apple", "isn't", "berries"]).unwrap();
    /// assert_eq!(lexicon.len(), 2);
    /// assert!(lexicon.contains("GRAPE"));
    /// assert!(!lexicon.contains("berries"));
    /// ```
    pub fn build<I, S>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total = 0usize;
        let mut words: Vec<Word> = lines
            .into_iter()
            .inspect(|_| total += 1)
            .filter_map(|line| loader::parse_line(line.as_ref()))
            .collect();

        words.sort_unstable();
        words.dedup();

        log::debug!(
            "lexicon kept {} of {} lines ({} dropped or duplicate)",
            words.len(),
            total,
            total - words.len()
        );

        if words.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self { words })
    }

    /// Build the lexicon from the word list compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Empty`] if the bundled list has no usable words.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::build(WORDS)
    }

    /// Build the lexicon from a word list file, one word per line
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the file cannot be read and
    /// [`LexiconError::Empty`] if it has no usable words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let lines = loader::read_lines(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lexicon = Self::build(lines)?;
        log::info!("loaded {} words from {}", lexicon.len(), path.display());
        Ok(lexicon)
    }

    /// Check whether a candidate guess is in the lexicon
    ///
    /// The candidate is trimmed and lowercased the same way dictionary lines
    /// are. Candidates of any length are accepted; they are simply not found.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        self.lookup(candidate).is_some()
    }

    /// Find the lexicon entry matching a candidate guess
    #[must_use]
    pub fn lookup(&self, candidate: &str) -> Option<&Word> {
        let needle = candidate.trim().to_lowercase();
        self.words
            .binary_search_by(|word| word.text().cmp(needle.as_str()))
            .ok()
            .map(|index| &self.words[index])
    }

    /// Pick a uniformly random word to serve as the hidden answer
    pub fn choose_answer<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        // Never empty: `build` rejects empty results
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a successfully built lexicon
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Lexicon {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
