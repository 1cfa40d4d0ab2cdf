//! Match extraction.
//!
//! Enumerates the matches of a compiled pattern against a text, left to
//! right. In global mode the search resumes at the end of each match; an
//! empty match forces the cursor one character forward so the same position
//! is never matched twice.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::Flags;
use crate::error::{PlaygroundError, Result};

/// A single match of a pattern in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Byte offset where the match starts.
    pub index: usize,
    /// The matched text, possibly empty.
    pub value: String,
}

impl Match {
    /// Byte offset just past the match.
    pub fn end(&self) -> usize {
        self.index + self.value.len()
    }
}

/// A pattern compiled together with its flags.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    flags: Flags,
    regex: Regex,
}

impl CompiledPattern {
    /// Compile `source` under `flags`.
    ///
    /// # Errors
    ///
    /// Returns `PatternSyntax` with the engine's diagnostic when either the
    /// flags or the pattern are invalid.
    pub fn new(source: &str, flags: &str) -> Result<Self> {
        let flags = Flags::parse(flags)?;
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .build()
            .map_err(|e| PlaygroundError::pattern_syntax(e.to_string()))?;

        Ok(Self {
            source: source.to_string(),
            flags,
            regex,
        })
    }

    /// The pattern source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed flags.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// All matches of this pattern in `text`, in increasing index order.
    ///
    /// Without the global flag at most one match is returned.
    pub fn find_matches(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut cursor = 0;

        while cursor <= text.len() {
            let Some(found) = self.regex.find_at(text, cursor) else {
                break;
            };
            if self.flags.sticky && found.start() != cursor {
                break;
            }

            matches.push(Match {
                index: found.start(),
                value: found.as_str().to_string(),
            });

            if !self.flags.global {
                break;
            }

            cursor = if found.is_empty() {
                step_past(text, found.end())
            } else {
                found.end()
            };
        }

        matches
    }
}

/// The offset of the character after `at`, or past the end of `text`.
fn step_past(text: &str, at: usize) -> usize {
    text[at..]
        .chars()
        .next()
        .map_or(at + 1, |c| at + c.len_utf8())
}

/// Compile `source` with `flags` and collect its matches in `text`.
pub fn extract_matches(source: &str, flags: &str, text: &str) -> Result<Vec<Match>> {
    Ok(CompiledPattern::new(source, flags)?.find_matches(text))
}

/// Escape every metacharacter so `literal` matches itself.
pub fn escape_regex(literal: &str) -> String {
    regex::escape(literal)
}
