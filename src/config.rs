//! Engine configuration
//!
//! Collects the knobs that were scattered as module constants in earlier
//! iterations of the game: wordlist sources, the solution-count threshold,
//! and the session duration.

use std::path::PathBuf;
use std::time::Duration;

/// Default minimum number of solutions a puzzle must have
pub const DEFAULT_MIN_SOLUTIONS: usize = 10;

/// Default bound on random base-word draws before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

/// Default session length in seconds
pub const DEFAULT_SESSION_SECONDS: u32 = 120;

/// Countdown tick interval
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for a game session
///
/// `None` wordlist sources select the embedded default lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Six-letter base-word list, or the embedded default
    pub base_word_source: Option<PathBuf>,
    /// Solution dictionary, or the embedded default
    pub dictionary_source: Option<PathBuf>,
    /// Minimum candidate-set size for an acceptable puzzle
    pub min_solutions: usize,
    /// Bound on puzzle-selection draws
    pub max_attempts: usize,
    /// Countdown duration for one level
    pub session_duration_secs: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_word_source: None,
            dictionary_source: None,
            min_solutions: DEFAULT_MIN_SOLUTIONS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            session_duration_secs: DEFAULT_SESSION_SECONDS,
        }
    }
}
