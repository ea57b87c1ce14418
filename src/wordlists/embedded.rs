//! Embedded word lists
//!
//! Bundled puzzle lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/base_words.rs"));
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
