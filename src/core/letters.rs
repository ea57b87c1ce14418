//! Letter multiset operations
//!
//! Sub-multiset containment is the heart of puzzle derivation: a word can be
//! spelled from a base word iff no letter appears in it more often than in
//! the base word.

use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for degenerate words passed to containment testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty word is not a valid puzzle element"),
        }
    }
}

impl std::error::Error for WordError {}

/// Count each letter in a word, case-folded
///
/// Used for sub-multiset containment with duplicate letters. Counters are
/// `usize` so arbitrarily long input, such as a word handed straight to the
/// CLI, cannot overflow them.
#[must_use]
pub fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars().flat_map(char::to_lowercase) {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Check whether `test` can be spelled from the letters of `base`
///
/// Both words are lowercased before comparison. Every letter of `test` must
/// occur at least as often in `base`.
///
/// # Errors
/// Returns [`WordError::Empty`] if either word is empty. An empty word is
/// never a meaningful puzzle element, so this is a contract violation rather
/// than a negative result.
///
/// # Examples
/// ```
/// use twistcore::core::is_sub_multiset;
///
/// assert!(is_sub_multiset("pear", "appear").unwrap());
/// assert!(is_sub_multiset("crows", "crowds").unwrap());
/// assert!(!is_sub_multiset("apple", "pale").unwrap());
/// assert!(is_sub_multiset("", "help").is_err());
/// ```
pub fn is_sub_multiset(test: &str, base: &str) -> Result<bool, WordError> {
    if test.is_empty() || base.is_empty() {
        return Err(WordError::Empty);
    }

    let base_counts = letter_counts(base);
    let test_counts = letter_counts(test);

    Ok(test_counts
        .iter()
        .all(|(ch, &count)| base_counts.get(ch).is_some_and(|&have| have >= count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_basic() {
        assert!(is_sub_multiset("pear", "appear").unwrap());
        assert!(is_sub_multiset("crows", "crowds").unwrap());
        assert!(is_sub_multiset("word", "swords").unwrap());
        assert!(!is_sub_multiset("crowds", "crows").unwrap());
    }

    #[test]
    fn containment_respects_multiplicity() {
        // One 'p' in "pale" cannot spell the two in "apple"
        assert!(!is_sub_multiset("apple", "pale").unwrap());
        assert!(is_sub_multiset("pep", "papers").unwrap());
        assert!(!is_sub_multiset("ppp", "papers").unwrap());
    }

    #[test]
    fn containment_case_insensitive() {
        assert!(is_sub_multiset("PEAR", "appear").unwrap());
        assert!(is_sub_multiset("pear", "APPEAR").unwrap());
    }

    #[test]
    fn containment_word_contains_itself() {
        assert!(is_sub_multiset("swords", "swords").unwrap());
    }

    #[test]
    fn containment_empty_words_error() {
        assert_eq!(is_sub_multiset("", "help"), Err(WordError::Empty));
        assert_eq!(is_sub_multiset("help", ""), Err(WordError::Empty));
        assert_eq!(is_sub_multiset("", ""), Err(WordError::Empty));
    }

    #[test]
    fn containment_handles_very_long_words() {
        // 300 wraps to 44 in an eight-bit counter, which would make the
        // long word look spellable from 44 letters
        let long = "a".repeat(300);
        assert_eq!(letter_counts(&long).get(&'a'), Some(&300));
        assert!(is_sub_multiset(&long, &long).unwrap());
        assert!(!is_sub_multiset(&long, &"a".repeat(44)).unwrap());
        assert!(is_sub_multiset("aaa", &long).unwrap());
    }

    #[test]
    fn letter_counts_duplicates() {
        let counts = letter_counts("appear");
        assert_eq!(counts.get(&'a'), Some(&2));
        assert_eq!(counts.get(&'p'), Some(&2));
        assert_eq!(counts.get(&'e'), Some(&1));
        assert_eq!(counts.get(&'r'), Some(&1));
        assert_eq!(counts.get(&'z'), None);
    }

    #[test]
    fn letter_counts_folds_case() {
        assert_eq!(letter_counts("AbBa"), letter_counts("abba"));
    }
}
