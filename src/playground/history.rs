//! Regex history.

use serde::{Deserialize, Serialize};

/// Bounded, de-duplicated regex history, most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    /// Maximum number of entries kept.
    pub const LIMIT: usize = 10;

    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from entries ordered most recent first.
    ///
    /// Empty strings and later duplicates are dropped and the result is
    /// truncated to [`History::LIMIT`].
    pub fn from_entries(entries: impl IntoIterator<Item = String>) -> Self {
        let mut history = Self::new();
        for entry in entries {
            if entry.is_empty() || history.entries.contains(&entry) {
                continue;
            }
            history.entries.push(entry);
        }
        history.entries.truncate(Self::LIMIT);
        history
    }

    /// Move `entry` to the front, evicting the oldest past the limit.
    ///
    /// Returns whether the history changed. Empty entries are ignored.
    pub fn push(&mut self, entry: &str) -> bool {
        if entry.is_empty() || self.entries.first().is_some_and(|e| e == entry) {
            return false;
        }
        self.entries.retain(|e| e != entry);
        self.entries.insert(0, entry.to_string());
        self.entries.truncate(Self::LIMIT);
        true
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
