//! Twistcore
//!
//! A word-puzzle session engine: pick a six-letter base word, derive every
//! dictionary word spellable from its letters, score player submissions, and
//! run a countdown clock that ends the session at zero.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use twistcore::bank::WordBank;
//! use twistcore::config::GameConfig;
//! use twistcore::session::{GameSession, SESSION_ENDED};
//!
//! let config = GameConfig::default();
//! let bank = WordBank::from_config(&config).unwrap();
//! let session = GameSession::new(bank, &config);
//!
//! session.register_ui_callback(SESSION_ENDED, |summary| {
//!     println!("Session over, score {}", summary.score);
//! });
//!
//! session.start_level().unwrap();
//! session.submit("pear");
//! ```

// Core domain types
pub mod core;

// Engine configuration
pub mod config;

// Puzzle selection
pub mod bank;

// Countdown clock
pub mod clock;

// Session orchestration
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
