//! Game session orchestration
//!
//! A [`GameSession`] owns one [`Clock`], requests puzzles from a
//! [`WordBank`], validates player submissions, and relays the clock's expiry
//! event to registered UI callbacks. Session state is shared with the
//! clock-expiry observer behind a mutex; the observer only reads.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{Arc, Mutex};

use crate::bank::{PuzzleError, WordBank};
use crate::clock::Clock;
use crate::config::GameConfig;
use crate::core::Puzzle;

/// Event name for the end-of-session UI callback
pub const SESSION_ENDED: &str = "session_ended";

/// Snapshot handed to UI callbacks when a session ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Candidate words the player never found, sorted
    pub missing_words: Vec<String>,
    /// Whether the base word itself was found
    pub level_passed: bool,
    /// Final score
    pub score: u32,
}

type UiCallback = Box<dyn Fn(&SessionSummary) + Send + Sync>;

#[derive(Default)]
struct SessionState {
    puzzle: Option<Puzzle>,
    solved: FxHashSet<String>,
    score: u32,
    level_passed: bool,
}

impl SessionState {
    fn reset(&mut self) {
        self.puzzle = None;
        self.solved.clear();
        self.score = 0;
        self.level_passed = false;
    }

    fn summary(&self) -> SessionSummary {
        let mut missing_words: Vec<String> = match &self.puzzle {
            Some(puzzle) => puzzle
                .candidates()
                .iter()
                .filter(|word| !self.solved.contains(*word))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        missing_words.sort_unstable();

        SessionSummary {
            missing_words,
            level_passed: self.level_passed,
            score: self.score,
        }
    }
}

/// One puzzle attempt from start to timer expiry or full completion
pub struct GameSession {
    bank: WordBank,
    clock: Clock,
    state: Arc<Mutex<SessionState>>,
    callbacks: Arc<Mutex<FxHashMap<String, UiCallback>>>,
}

impl GameSession {
    /// Create a session from a bank and configuration
    #[must_use]
    pub fn new(bank: WordBank, config: &GameConfig) -> Self {
        Self::with_clock(bank, Clock::new(config.session_duration_secs))
    }

    /// Create a session around a specific clock
    ///
    /// Lets the caller pick the tick granularity; tests use short ticks.
    #[must_use]
    pub fn with_clock(bank: WordBank, clock: Clock) -> Self {
        let state = Arc::new(Mutex::new(SessionState::default()));
        let callbacks: Arc<Mutex<FxHashMap<String, UiCallback>>> =
            Arc::new(Mutex::new(FxHashMap::default()));

        // Relay the clock's single event to every registered UI callback,
        // with enough session state for presentation
        let observed_state = Arc::clone(&state);
        let observed_callbacks = Arc::clone(&callbacks);
        clock.add_observer(move || {
            let summary = observed_state
                .lock()
                .expect("session state poisoned")
                .summary();
            let callbacks = observed_callbacks
                .lock()
                .expect("session callbacks poisoned");
            for callback in callbacks.values() {
                callback(&summary);
            }
        });

        Self {
            bank,
            clock,
            state,
            callbacks,
        }
    }

    /// Start a new level: fresh puzzle, cleared state, running clock
    ///
    /// # Errors
    /// Propagates [`PuzzleError`] from puzzle selection; the caller decides
    /// user-facing recovery.
    pub fn start_level(&self) -> Result<(), PuzzleError> {
        let puzzle = self.bank.select_puzzle()?;

        {
            let mut state = self.state.lock().expect("session state poisoned");
            state.puzzle = Some(puzzle);
            state.solved.clear();
            state.score = 0;
            state.level_passed = false;
        }

        self.clock.start();
        Ok(())
    }

    /// Submit a player word
    ///
    /// Case is normalized. Duplicates and words outside the candidate set are
    /// ordinary negative results, not errors. An accepted word scores its
    /// length; finding the base word passes the level; completing the whole
    /// candidate set ends the session immediately.
    pub fn submit(&self, word: &str) -> bool {
        let normalized = word.trim().to_ascii_lowercase();

        let completed = {
            let mut state = self.state.lock().expect("session state poisoned");

            let (known, base_len, total) = match &state.puzzle {
                Some(puzzle) => (
                    puzzle.contains(&normalized),
                    puzzle.base_word().len(),
                    puzzle.solution_count(),
                ),
                None => return false,
            };
            if !known || state.solved.contains(&normalized) {
                return false;
            }

            state.score += normalized.len() as u32;
            if normalized.len() == base_len {
                state.level_passed = true;
            }
            state.solved.insert(normalized);
            state.solved.len() == total
        };

        // Outside the state lock: the expiry observer re-acquires it
        if completed {
            self.clock.force_expire();
        }
        true
    }

    /// Hard reset: clear all session state and return the clock to idle
    /// without firing expiry
    pub fn reset_game(&self) {
        self.state
            .lock()
            .expect("session state poisoned")
            .reset();
        self.clock.cancel();
    }

    /// Register a UI handler for a named event
    ///
    /// One handler per name; later registration overwrites. The recognized
    /// name is [`SESSION_ENDED`].
    pub fn register_ui_callback<F>(&self, name: &str, callback: F)
    where
        F: Fn(&SessionSummary) + Send + Sync + 'static,
    {
        self.callbacks
            .lock()
            .expect("session callbacks poisoned")
            .insert(name.to_string(), Box::new(callback));
    }

    /// The letters of the current base word, in order
    #[must_use]
    pub fn letters(&self) -> Vec<char> {
        self.state
            .lock()
            .expect("session state poisoned")
            .puzzle
            .as_ref()
            .map(Puzzle::letters)
            .unwrap_or_default()
    }

    /// The current base word, if a level is active
    #[must_use]
    pub fn base_word(&self) -> Option<String> {
        self.state
            .lock()
            .expect("session state poisoned")
            .puzzle
            .as_ref()
            .map(|puzzle| puzzle.base_word().to_string())
    }

    /// All candidate words of the current puzzle, sorted
    #[must_use]
    pub fn wordlist(&self) -> Vec<String> {
        let state = self.state.lock().expect("session state poisoned");
        let mut words: Vec<String> = state
            .puzzle
            .as_ref()
            .map(|puzzle| puzzle.candidates().iter().cloned().collect())
            .unwrap_or_default();
        words.sort_unstable();
        words
    }

    /// Words the player has found so far, sorted
    #[must_use]
    pub fn solution_words(&self) -> Vec<String> {
        let state = self.state.lock().expect("session state poisoned");
        let mut words: Vec<String> = state.solved.iter().cloned().collect();
        words.sort_unstable();
        words
    }

    /// Candidate words not yet found, sorted
    #[must_use]
    pub fn missing_words(&self) -> Vec<String> {
        self.state
            .lock()
            .expect("session state poisoned")
            .summary()
            .missing_words
    }

    /// Current score: the summed length of every found word
    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.lock().expect("session state poisoned").score
    }

    /// Whether the base word has been found this level
    #[must_use]
    pub fn is_level_passed(&self) -> bool {
        self.state
            .lock()
            .expect("session state poisoned")
            .level_passed
    }

    /// The session clock, for remaining-time display and observers
    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockPhase;
    use crate::wordlists::WordList;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn swords_bank(dictionary: &str) -> WordBank {
        WordBank::new(
            WordList::parse("swords\n", "bases").unwrap(),
            WordList::parse(dictionary, "dict").unwrap(),
            1,
            10,
        )
    }

    fn started_session(dictionary: &str) -> GameSession {
        let session = GameSession::with_clock(
            swords_bank(dictionary),
            Clock::with_tick(120, Duration::from_millis(50)),
        );
        session.start_level().unwrap();
        session
    }

    #[test]
    fn start_level_populates_puzzle_and_runs_clock() {
        let session = started_session("swords\nsword\nword\n");

        assert_eq!(session.base_word().as_deref(), Some("swords"));
        assert_eq!(session.letters(), vec!['s', 'w', 'o', 'r', 'd', 's']);
        assert_eq!(session.wordlist(), vec!["sword", "swords", "word"]);
        assert_eq!(session.score(), 0);
        assert!(session.clock().is_running());
        session.reset_game();
    }

    #[test]
    fn submit_scores_word_length() {
        let session = started_session("swords\nsword\nword\n");

        assert!(session.submit("word"));
        assert_eq!(session.score(), 4);
        assert!(session.submit("sword"));
        assert_eq!(session.score(), 9);
        assert_eq!(session.solution_words(), vec!["sword", "word"]);
        session.reset_game();
    }

    #[test]
    fn submit_rejects_duplicates_without_mutation() {
        let session = started_session("swords\nsword\nword\n");

        assert!(session.submit("word"));
        assert!(!session.submit("word"));
        assert_eq!(session.score(), 4);
        assert_eq!(session.solution_words().len(), 1);
        session.reset_game();
    }

    #[test]
    fn submit_rejects_unknown_words() {
        let session = started_session("swords\nsword\nword\n");

        assert!(!session.submit("zebra"));
        assert!(!session.submit("rows")); // formable but not in the dictionary
        assert_eq!(session.score(), 0);
        session.reset_game();
    }

    #[test]
    fn submit_normalizes_case() {
        let session = started_session("swords\nsword\nword\n");

        assert!(session.submit("WORD"));
        assert!(!session.submit("word"));
        assert_eq!(session.solution_words(), vec!["word"]);
        session.reset_game();
    }

    #[test]
    fn submit_before_start_is_rejected() {
        let session = GameSession::with_clock(
            swords_bank("swords\nsword\n"),
            Clock::with_tick(120, Duration::from_millis(50)),
        );
        assert!(!session.submit("sword"));
    }

    #[test]
    fn base_word_passes_the_level() {
        let session = started_session("swords\nwords\n");

        assert!(session.submit("swords"));
        assert!(session.is_level_passed());
        session.reset_game();
    }

    #[test]
    fn level_not_passed_without_base_word() {
        let session = started_session("swords\nsword\nword\n");

        assert!(session.submit("sword"));
        assert!(!session.is_level_passed());
        assert!(session.submit("word"));
        assert!(!session.is_level_passed());
        session.reset_game();
    }

    #[test]
    fn completing_the_wordlist_forces_expiry() {
        let session = started_session("swords\nsword\nword\n");
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);
        session.register_ui_callback(SESSION_ENDED, move |summary| {
            assert!(summary.missing_words.is_empty());
            assert!(summary.level_passed);
            count.fetch_add(1, Ordering::SeqCst);
        });

        assert!(session.submit("sword"));
        assert!(session.submit("word"));
        assert_eq!(session.clock().phase(), ClockPhase::Running);

        assert!(session.submit("swords"));
        assert_eq!(session.clock().phase(), ClockPhase::Expired);
        assert_eq!(session.clock().remaining(), 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn session_summary_reports_missing_words() {
        let session = started_session("swords\nsword\nword\n");
        let summaries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&summaries);
        session.register_ui_callback(SESSION_ENDED, move |summary| {
            sink.lock().unwrap().push(summary.clone());
        });

        assert!(session.submit("word"));
        session.clock().force_expire();

        let summaries = summaries.lock().unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].missing_words, vec!["sword", "swords"]);
        assert!(!summaries[0].level_passed);
        assert_eq!(summaries[0].score, 4);
    }

    #[test]
    fn later_callback_registration_overwrites() {
        let session = started_session("swords\nsword\n");
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let count = Arc::clone(&first);
        session.register_ui_callback(SESSION_ENDED, move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        });
        let count = Arc::clone(&second);
        session.register_ui_callback(SESSION_ENDED, move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        });

        session.clock().force_expire();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_then_start_yields_fresh_session() {
        let session = started_session("swords\nsword\nword\n");
        assert!(session.submit("sword"));

        session.reset_game();
        assert_eq!(session.score(), 0);
        assert!(session.solution_words().is_empty());
        assert!(session.base_word().is_none());
        assert_eq!(session.clock().phase(), ClockPhase::Idle);
        assert_eq!(session.clock().remaining(), 120);

        session.start_level().unwrap();
        assert_eq!(session.score(), 0);
        assert!(session.solution_words().is_empty());
        assert!(session.clock().is_running());
        assert_eq!(session.clock().remaining(), 120);
        session.reset_game();
    }

    #[test]
    fn reset_does_not_fire_session_end() {
        let session = started_session("swords\nsword\n");
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);
        session.register_ui_callback(SESSION_ENDED, move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        });

        session.reset_game();
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn start_level_propagates_selection_failure() {
        let bank = WordBank::new(
            WordList::parse("zzzzzz\n", "bases").unwrap(),
            WordList::parse("word\n", "dict").unwrap(),
            10,
            3,
        );
        let session =
            GameSession::with_clock(bank, Clock::with_tick(120, Duration::from_millis(50)));

        assert!(matches!(
            session.start_level(),
            Err(PuzzleError::NoSuitablePuzzle { attempts: 3, .. })
        ));
        assert!(!session.clock().is_running());
    }
}
