//! Terminal output formatting
//!
//! Display utilities for the CLI front end.

pub mod display;
pub mod formatters;

pub use display::{print_accepted, print_puzzle, print_rejected, print_session_summary};
pub use formatters::{format_seconds, letter_rack};
