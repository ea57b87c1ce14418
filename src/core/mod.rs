//! Core domain types for the puzzle engine
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod puzzle;

pub use letters::{WordError, is_sub_multiset, letter_counts};
pub use puzzle::Puzzle;

/// Shortest word admitted into a candidate set
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word admitted into a candidate set, and the base-word length
pub const MAX_WORD_LENGTH: usize = 6;
