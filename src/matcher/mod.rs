//! Pattern compilation and match extraction.
//!
//! - [`Flags`] - single-character mode switches and their parsing
//! - [`CompiledPattern`] - a pattern compiled with its flags
//! - [`extract_matches`] - the ordered, non-overlapping match list
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

mod extract;
mod flags;

pub use extract::{escape_regex, extract_matches, CompiledPattern, Match};
pub use flags::{toggle_flag, Flags, DEFAULT_FLAGS, KNOWN_FLAGS};
