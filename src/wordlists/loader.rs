//! Word list loading and validation
//!
//! Dictionary sources are line-oriented text files of lowercase alphabetic
//! words, one per line. A single malformed line invalidates the entire load:
//! a corrupted dictionary must not silently produce a truncated puzzle.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for word list loading failures
#[derive(Debug)]
pub enum LoadError {
    /// The source could not be opened or is not valid text
    Source { source: String, reason: io::Error },
    /// A line violates the word-token contract (1-based line number)
    Format { source: String, line: usize },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source { source, reason } => {
                write!(f, "Cannot read word list '{source}': {reason}")
            }
            Self::Format { source, line } => {
                write!(f, "Formatting error on line {line} of '{source}'")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source { reason, .. } => Some(reason),
            Self::Format { .. } => None,
        }
    }
}

/// An immutable list of validated lowercase alphabetic word tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file
    ///
    /// # Errors
    /// Returns [`LoadError::Source`] if the file is missing, unreadable, or
    /// not valid UTF-8, and [`LoadError::Format`] for the first line that is
    /// empty or contains a non-alphabetic character.
    ///
    /// # Examples
    /// ```no_run
    /// use twistcore::wordlists::WordList;
    ///
    /// let words = WordList::load("data/dictionary.txt").unwrap();
    /// println!("Loaded {} words", words.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let source = path.as_ref().display().to_string();
        let content = fs::read_to_string(&path).map_err(|reason| LoadError::Source {
            source: source.clone(),
            reason,
        })?;

        Self::parse(&content, &source)
    }

    /// Parse word list content, validating every line
    ///
    /// Tokens are normalized to lowercase. Line numbers in errors are 1-based.
    ///
    /// # Errors
    /// Returns [`LoadError::Format`] for the first malformed line: empty,
    /// embedded whitespace, or any non-ASCII-alphabetic character.
    pub fn parse(content: &str, source: &str) -> Result<Self, LoadError> {
        let mut words = Vec::new();

        for (index, token) in content.lines().enumerate() {
            if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(LoadError::Format {
                    source: source.to_string(),
                    line: index + 1,
                });
            }
            words.push(token.to_ascii_lowercase());
        }

        Ok(Self { words })
    }

    /// Build a word list from pre-validated static tokens
    ///
    /// Used for the embedded default lists; invalid tokens are rejected the
    /// same way a file load rejects them.
    ///
    /// # Errors
    /// Returns [`LoadError::Format`] if a token is empty or non-alphabetic.
    pub fn from_words<I, S>(words: I, source: &str) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated = Vec::new();

        for (index, word) in words.into_iter().enumerate() {
            let token = word.as_ref();
            if token.is_empty() || !token.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(LoadError::Format {
                    source: source.to_string(),
                    line: index + 1,
                });
            }
            validated.push(token.to_ascii_lowercase());
        }

        Ok(Self { words: validated })
    }

    /// The validated words, in source order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the list
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
