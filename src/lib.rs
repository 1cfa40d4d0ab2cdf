//! Regex Playground - the core of an interactive regular-expression tester.
//!
//! As a user edits a regex, its flags, or the text under test, the
//! playground recomputes matches, validity, and timing, explains the regex
//! token by token, keeps a short de-duplicated history of recently used
//! regexes (recorded only once typing settles), and persists named
//! patterns.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`debounce`] - Deadline-driven debounce scheduler
//! - [`error`] - Error types and result aliases
//! - [`explain`] - Plain-language regex explanations
//! - [`matcher`] - Flag parsing and match extraction
//! - [`playground`] - The state machine, history, saved patterns, and sessions
//! - [`storage`] - Key-value persistence of saved patterns and history
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use regex_playground::matcher::extract_matches;
//!
//! let matches = extract_matches(r"\d+", "g", "a1 b22").unwrap();
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[1].index, 4);
//! assert_eq!(matches[1].value, "22");
//! ```

pub mod cli;
pub mod config;
pub mod debounce;
pub mod error;
pub mod explain;
pub mod matcher;
pub mod playground;
pub mod storage;
pub mod ui;

pub use error::{PlaygroundError, Result};
