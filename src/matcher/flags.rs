//! Pattern flag parsing.
//!
//! Flags are single-character mode switches (`g`, `i`, `m`, ...). A flag
//! string is order-insensitive and each character may appear at most once.

use std::fmt;

use crate::error::{PlaygroundError, Result};

/// The flag characters a pattern may carry.
pub const KNOWN_FLAGS: &str = "dgimsuy";

/// Flags applied when nothing else is selected.
pub const DEFAULT_FLAGS: &str = "g";

/// Parsed pattern flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `g`: produce every non-overlapping match.
    pub global: bool,
    /// `i`: case-insensitive matching.
    pub case_insensitive: bool,
    /// `m`: `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `s`: `.` also matches newlines.
    pub dot_all: bool,
    /// `y`: every match must start exactly at the search cursor.
    pub sticky: bool,
    /// `u`: accepted; the engine is always Unicode-aware.
    pub unicode: bool,
    /// `d`: accepted; match indices are always reported.
    pub indices: bool,
}

impl Flags {
    /// Parse a flag string, rejecting unknown and repeated characters.
    pub fn parse(flags: &str) -> Result<Self> {
        let mut parsed = Flags::default();

        for c in flags.chars() {
            let slot = match c {
                'g' => &mut parsed.global,
                'i' => &mut parsed.case_insensitive,
                'm' => &mut parsed.multi_line,
                's' => &mut parsed.dot_all,
                'y' => &mut parsed.sticky,
                'u' => &mut parsed.unicode,
                'd' => &mut parsed.indices,
                _ => return Err(invalid_flags(flags)),
            };
            if *slot {
                return Err(invalid_flags(flags));
            }
            *slot = true;
        }

        Ok(parsed)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            (self.indices, 'd'),
            (self.global, 'g'),
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_all, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ];
        for (set, c) in pairs {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

fn invalid_flags(flags: &str) -> PlaygroundError {
    PlaygroundError::pattern_syntax(format!("Invalid flags supplied: '{}'", flags))
}

/// Add or remove a single flag character.
pub fn toggle_flag(flags: &str, flag: char, enabled: bool) -> String {
    let without: String = flags.chars().filter(|&c| c != flag).collect();
    if enabled {
        let mut with = without;
        with.push(flag);
        with
    } else {
        without
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_flags() {
        let flags = Flags::parse("gim").unwrap();
        assert!(flags.global);
        assert!(flags.case_insensitive);
        assert!(flags.multi_line);
        assert!(!flags.dot_all);
        assert!(!flags.sticky);
    }

    #[test]
    fn empty_flags_are_valid() {
        assert_eq!(Flags::parse("").unwrap(), Flags::default());
    }

    #[test]
    fn order_does_not_matter() {
        assert_eq!(Flags::parse("mig").unwrap(), Flags::parse("gim").unwrap());
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = Flags::parse("gx").unwrap_err();
        assert!(matches!(err, PlaygroundError::PatternSyntax { .. }));
        assert!(err.diagnostic().contains("gx"));
    }

    #[test]
    fn rejects_repeated_flag() {
        assert!(Flags::parse("gg").is_err());
    }

    #[test]
    fn display_is_canonical() {
        let flags = Flags::parse("ymig").unwrap();
        assert_eq!(flags.to_string(), "gimy");
    }

    #[test]
    fn toggle_adds_and_removes() {
        assert_eq!(toggle_flag("g", 'i', true), "gi");
        assert_eq!(toggle_flag("gi", 'i', true), "gi");
        assert_eq!(toggle_flag("gi", 'g', false), "i");
        assert_eq!(toggle_flag("", 'm', false), "");
    }
}
