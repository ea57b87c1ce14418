//! Puzzle representation
//!
//! A puzzle pairs a base word with the full set of dictionary words that can
//! be spelled from its letters. Built only by `WordBank::select_puzzle`;
//! immutable once returned.

use rustc_hash::FxHashSet;

/// A base word and its derived candidate word set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    base: String,
    candidates: FxHashSet<String>,
}

impl Puzzle {
    pub(crate) fn new(base: String, candidates: FxHashSet<String>) -> Self {
        Self { base, candidates }
    }

    /// The base word whose letters define the puzzle's letter pool
    #[inline]
    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base
    }

    /// The letters of the base word, in order
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.base.chars().collect()
    }

    /// All words formable from the base word's letters
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &FxHashSet<String> {
        &self.candidates
    }

    /// Number of solution words in this puzzle
    #[inline]
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.candidates.len()
    }

    /// Whether `word` is one of this puzzle's solutions
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.candidates.contains(word)
    }
}
