//! Saved patterns and the built-in pattern library.

use serde::{Deserialize, Serialize};

/// The selection value meaning "no pattern selected".
pub const NO_SELECTION: &str = "default";

/// A user-saved pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPattern {
    /// Unique name among saved patterns.
    pub name: String,
    /// Pattern source.
    pub regex: String,
    /// Flag string.
    pub flags: String,
}

impl SavedPattern {
    /// Create a saved pattern.
    pub fn new(name: impl Into<String>, regex: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
            flags: flags.into(),
        }
    }
}

/// A pattern shipped with the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinPattern {
    pub name: &'static str,
    pub regex: &'static str,
    pub description: &'static str,
}

/// Built-in patterns, loaded with the default flags.
pub const BUILTIN_PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "email",
        regex: r"^[\w.-]+@([\w-]+\.)+[\w-]{2,4}$",
        description: "Matches most email addresses",
    },
    BuiltinPattern {
        name: "phoneNumber",
        regex: r"^\+?\d{10,14}$",
        description: "Matches phone numbers with optional + prefix",
    },
    BuiltinPattern {
        name: "url",
        regex: r"https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_+.~#?&/=]*)",
        description: "Matches URLs",
    },
    BuiltinPattern {
        name: "ipAddress",
        regex: r"\b(?:\d{1,3}\.){3}\d{1,3}\b",
        description: "Matches IPv4 addresses",
    },
    BuiltinPattern {
        name: "date",
        regex: r"\d{4}-\d{2}-\d{2}",
        description: "Matches dates in YYYY-MM-DD format",
    },
];

/// Look up a built-in pattern by name.
pub fn builtin(name: &str) -> Option<&'static BuiltinPattern> {
    BUILTIN_PATTERNS.iter().find(|p| p.name == name)
}

/// Insert `pattern`, replacing any saved pattern with the same name in place.
pub(crate) fn upsert(patterns: &mut Vec<SavedPattern>, pattern: SavedPattern) {
    match patterns.iter_mut().find(|p| p.name == pattern.name) {
        Some(existing) => *existing = pattern,
        None => patterns.push(pattern),
    }
}

/// Remove every saved pattern named `name`. Returns whether any was removed.
pub(crate) fn remove(patterns: &mut Vec<SavedPattern>, name: &str) -> bool {
    let before = patterns.len();
    patterns.retain(|p| p.name != name);
    patterns.len() != before
}

/// Collapse duplicate names, keeping the last definition at the first position.
pub(crate) fn dedupe(patterns: Vec<SavedPattern>) -> Vec<SavedPattern> {
    let mut out = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        upsert(&mut out, pattern);
    }
    out
}
