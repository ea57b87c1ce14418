//! Word lists for puzzle generation
//!
//! Provides the validated [`WordList`] type plus embedded default lists
//! compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{BASE_WORDS, BASE_WORDS_COUNT, DICTIONARY, DICTIONARY_COUNT};
pub use loader::{LoadError, WordList};

/// The bundled six-letter base-word list
///
/// # Panics
/// Panics if the embedded list fails validation, which would mean a broken
/// build artifact.
#[must_use]
pub fn embedded_base_words() -> WordList {
    WordList::from_words(BASE_WORDS.iter().copied(), "<embedded base words>")
        .expect("embedded base-word list is validated at build time")
}

/// The bundled solution dictionary
///
/// # Panics
/// Panics if the embedded list fails validation, which would mean a broken
/// build artifact.
#[must_use]
pub fn embedded_dictionary() -> WordList {
    WordList::from_words(DICTIONARY.iter().copied(), "<embedded dictionary>")
        .expect("embedded dictionary is validated at build time")
}
