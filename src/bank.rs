//! Puzzle selection from word lists
//!
//! The [`WordBank`] draws random six-letter base words and derives their
//! candidate sets until one clears the minimum-solution threshold.

use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

use crate::config::GameConfig;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Puzzle, WordError, is_sub_multiset};
use crate::wordlists::{LoadError, WordList, embedded_base_words, embedded_dictionary};

/// Error type for puzzle selection failures
#[derive(Debug)]
pub enum PuzzleError {
    /// No base word met the minimum-solution threshold within the draw bound
    NoSuitablePuzzle { attempts: usize, min_solutions: usize },
    /// The base-word list has nothing to draw from
    EmptyBaseList,
    /// A degenerate word reached containment testing
    Word(WordError),
    /// A wordlist source failed to load
    Load(LoadError),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuitablePuzzle {
                attempts,
                min_solutions,
            } => write!(
                f,
                "No base word with at least {min_solutions} solutions found in {attempts} draws"
            ),
            Self::EmptyBaseList => write!(f, "Base-word list is empty"),
            Self::Word(err) => write!(f, "{err}"),
            Self::Load(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(err) => Some(err),
            Self::Load(err) => Some(err),
            _ => None,
        }
    }
}

impl From<WordError> for PuzzleError {
    fn from(err: WordError) -> Self {
        Self::Word(err)
    }
}

impl From<LoadError> for PuzzleError {
    fn from(err: LoadError) -> Self {
        Self::Load(err)
    }
}

/// Derive the candidate set for a base word
///
/// Returns every dictionary word of length 3-6 whose letters are a
/// sub-multiset of the base word's letters. The base word itself is a
/// candidate when the dictionary contains it.
///
/// # Errors
/// Returns [`WordError::Empty`] for an empty base word.
///
/// # Examples
/// ```
/// use twistcore::bank::derive_candidates;
/// use twistcore::wordlists::WordList;
///
/// let dictionary = WordList::parse("sword\nword\nrows\nzebra\n", "demo").unwrap();
/// let candidates = derive_candidates("swords", &dictionary).unwrap();
/// assert_eq!(candidates.len(), 3);
/// assert!(!candidates.contains("zebra"));
/// ```
pub fn derive_candidates(
    base_word: &str,
    dictionary: &WordList,
) -> Result<FxHashSet<String>, WordError> {
    if base_word.is_empty() {
        return Err(WordError::Empty);
    }

    let mut candidates = FxHashSet::default();
    for word in dictionary.iter() {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len()) {
            continue;
        }
        if is_sub_multiset(word, base_word)? {
            candidates.insert(word.to_string());
        }
    }

    Ok(candidates)
}

/// Selects random puzzles meeting a minimum-solution threshold
pub struct WordBank {
    base_words: WordList,
    dictionary: WordList,
    min_solutions: usize,
    max_attempts: usize,
}

impl WordBank {
    /// Create a bank from already-loaded word lists
    #[must_use]
    pub const fn new(
        base_words: WordList,
        dictionary: WordList,
        min_solutions: usize,
        max_attempts: usize,
    ) -> Self {
        Self {
            base_words,
            dictionary,
            min_solutions,
            max_attempts,
        }
    }

    /// Create a bank from configuration, loading file sources or falling
    /// back to the embedded default lists
    ///
    /// # Errors
    /// Returns [`LoadError`] if a configured source is unreadable or contains
    /// a malformed line.
    pub fn from_config(config: &GameConfig) -> Result<Self, LoadError> {
        let base_words = match &config.base_word_source {
            Some(path) => WordList::load(path)?,
            None => embedded_base_words(),
        };
        let dictionary = match &config.dictionary_source {
            Some(path) => WordList::load(path)?,
            None => embedded_dictionary(),
        };

        Ok(Self::new(
            base_words,
            dictionary,
            config.min_solutions,
            config.max_attempts,
        ))
    }

    /// The solution dictionary backing this bank
    #[must_use]
    pub const fn dictionary(&self) -> &WordList {
        &self.dictionary
    }

    /// The base-word list backing this bank
    #[must_use]
    pub const fn base_words(&self) -> &WordList {
        &self.base_words
    }

    /// Draw random base words until one has enough solutions
    ///
    /// Draws are uniform over the base-word list. The draw bound keeps a
    /// pathological list from looping forever.
    ///
    /// # Errors
    /// Returns [`PuzzleError::EmptyBaseList`] when there is nothing to draw
    /// from, and [`PuzzleError::NoSuitablePuzzle`] after `max_attempts`
    /// draws below the threshold.
    pub fn select_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        if self.base_words.is_empty() {
            return Err(PuzzleError::EmptyBaseList);
        }

        let mut rng = rand::rng();
        for _ in 0..self.max_attempts {
            let base = self
                .base_words
                .words()
                .choose(&mut rng)
                .ok_or(PuzzleError::EmptyBaseList)?;

            let candidates = derive_candidates(base, &self.dictionary)?;
            if candidates.len() >= self.min_solutions {
                return Ok(Puzzle::new(base.clone(), candidates));
            }
        }

        Err(PuzzleError::NoSuitablePuzzle {
            attempts: self.max_attempts,
            min_solutions: self.min_solutions,
        })
    }

    /// Build the puzzle for a specific base word, bypassing random selection
    ///
    /// Used by the CLI inspection command; no threshold is applied.
    ///
    /// # Errors
    /// Returns [`WordError::Empty`] for an empty base word.
    pub fn puzzle_for(&self, base_word: &str) -> Result<Puzzle, WordError> {
        let base = base_word.to_ascii_lowercase();
        let candidates = derive_candidates(&base, &self.dictionary)?;
        Ok(Puzzle::new(base, candidates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_dictionary() -> WordList {
        WordList::parse(
            "swords\nsword\nwords\nword\nrows\nrods\ndross\nsods\nrow\nrod\nsow\nsod\ndos\nzebra\npear\nappear\n",
            "demo",
        )
        .unwrap()
    }

    #[test]
    fn derive_candidates_only_sub_multisets() {
        let dictionary = demo_dictionary();
        let candidates = derive_candidates("swords", &dictionary).unwrap();

        for word in &candidates {
            assert!(is_sub_multiset(word, "swords").unwrap());
        }
        assert!(candidates.contains("sword"));
        assert!(candidates.contains("words"));
        assert!(candidates.contains("swords"));
        assert!(!candidates.contains("zebra"));
        assert!(!candidates.contains("pear"));
    }

    #[test]
    fn derive_candidates_skips_short_and_long_words() {
        let dictionary = WordList::parse("so\nos\nsword\n", "demo").unwrap();
        let candidates = derive_candidates("swords", &dictionary).unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains("sword"));
    }

    #[test]
    fn derive_candidates_empty_base_errors() {
        let dictionary = demo_dictionary();
        assert_eq!(derive_candidates("", &dictionary), Err(WordError::Empty));
    }

    #[test]
    fn select_puzzle_meets_threshold() {
        let base_words = WordList::parse("swords\n", "bases").unwrap();
        let bank = WordBank::new(base_words, demo_dictionary(), 10, 50);

        // "swords" yields 13 words from the demo dictionary
        for _ in 0..20 {
            let puzzle = bank.select_puzzle().unwrap();
            assert!(puzzle.solution_count() >= 10);
            assert_eq!(puzzle.base_word(), "swords");
        }
    }

    #[test]
    fn select_puzzle_bounded_retry() {
        let base_words = WordList::parse("zebra\n", "bases").unwrap();
        let bank = WordBank::new(base_words, demo_dictionary(), 10, 7);

        match bank.select_puzzle() {
            Err(PuzzleError::NoSuitablePuzzle { attempts, .. }) => assert_eq!(attempts, 7),
            other => panic!("expected NoSuitablePuzzle, got {other:?}"),
        }
    }

    #[test]
    fn select_puzzle_empty_base_list() {
        let base_words = WordList::parse("", "bases").unwrap();
        let bank = WordBank::new(base_words, demo_dictionary(), 10, 5);
        assert!(matches!(
            bank.select_puzzle(),
            Err(PuzzleError::EmptyBaseList)
        ));
    }

    #[test]
    fn embedded_lists_always_produce_puzzles() {
        let bank = WordBank::from_config(&GameConfig::default()).unwrap();
        for _ in 0..10 {
            let puzzle = bank.select_puzzle().unwrap();
            assert_eq!(puzzle.base_word().len(), MAX_WORD_LENGTH);
            assert!(puzzle.solution_count() >= 10);
        }
    }

    #[test]
    fn from_config_missing_file_propagates() {
        let config = GameConfig {
            dictionary_source: Some("/no/such/file.txt".into()),
            ..GameConfig::default()
        };
        assert!(matches!(
            WordBank::from_config(&config),
            Err(LoadError::Source { .. })
        ));
    }

    #[test]
    fn puzzle_for_normalizes_case() {
        let bank = WordBank::new(
            WordList::parse("swords\n", "bases").unwrap(),
            demo_dictionary(),
            10,
            5,
        );
        let puzzle = bank.puzzle_for("SWORDS").unwrap();
        assert_eq!(puzzle.base_word(), "swords");
        assert!(puzzle.contains("sword"));
    }
}
