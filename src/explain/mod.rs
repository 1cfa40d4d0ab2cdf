//! Human-readable explanations of a pattern.
//!
//! This is a best-effort single pass over the pattern source, not a parser.
//! Anchors are checked once on the whole source; everything else comes from
//! the token scan in [`token`].
//!
//! # Example
//!
//! ```
//! use regex_playground::explain::explain;
//!
//! let lines = explain(r"\d+");
//! assert_eq!(lines, vec![
//!     r"Special character: \d".to_string(),
//!     "Matches 1 or more of the preceding character".to_string(),
//! ]);
//! ```

pub mod token;

pub use token::{tokenize, Token, TokenKind, Tokens};

/// What callers show when [`explain`] returns nothing.
pub const NO_EXPLANATION: &str = "No explanation available for the given regex.";

pub const START_OF_LINE: &str = "Matches the start of the line";
pub const END_OF_LINE: &str = "Matches the end of the line";

/// Describe a single token, if it has a special meaning.
pub fn describe(token: &Token<'_>) -> Option<String> {
    match token.kind {
        TokenKind::Single => match token.text {
            "." => Some("Matches any character except newline".to_string()),
            "*" => Some("Matches 0 or more of the preceding character".to_string()),
            "+" => Some("Matches 1 or more of the preceding character".to_string()),
            "?" => Some("Matches 0 or 1 of the preceding character".to_string()),
            _ => None,
        },
        TokenKind::BracketSet => Some(format!(
            "Matches any single character in the set: {}",
            token.text
        )),
        TokenKind::NonCapturingGroup | TokenKind::Group => {
            Some(format!("Grouping: {}", token.text))
        }
        TokenKind::Escape => Some(format!("Special character: {}", token.text)),
        TokenKind::Word => None,
    }
}

/// Explain `source` as an ordered list of sentences.
///
/// Anchor explanations come first (start, then end), followed by one entry
/// per meaningful token in source order. An empty list means nothing was
/// recognised; see [`NO_EXPLANATION`].
pub fn explain(source: &str) -> Vec<String> {
    let mut explanations = Vec::new();

    if source.starts_with('^') {
        explanations.push(START_OF_LINE.to_string());
    }
    if source.ends_with('$') {
        explanations.push(END_OF_LINE.to_string());
    }

    explanations.extend(tokenize(source).filter_map(|token| describe(&token)));
    explanations
}
