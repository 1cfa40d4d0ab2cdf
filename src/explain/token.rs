//! Lexical scan of a pattern source.
//!
//! At each position the matchers in `MATCHERS` are tried in order and the
//! first one that accepts wins. None of them nest: a bracket set runs to the
//! first `]`, a group to the first `)`.

/// The kind of lexical token found in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A backslash and the character after it, e.g. `\d`.
    Escape,
    /// A bracket expression, e.g. `[a-z]`.
    BracketSet,
    /// A non-capturing group, e.g. `(?:ab)`.
    NonCapturingGroup,
    /// A parenthesized group, e.g. `(ab)`.
    Group,
    /// A run of ASCII word characters.
    Word,
    /// Any other single character.
    Single,
}

/// A token and the exact source text it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Returns the byte length of the token at the start of `rest`, if any.
type Matcher = fn(&str) -> Option<usize>;

/// Token matchers by priority.
const MATCHERS: &[(TokenKind, Matcher)] = &[
    (TokenKind::Escape, match_escape as Matcher),
    (TokenKind::BracketSet, match_bracket_set as Matcher),
    (TokenKind::NonCapturingGroup, match_non_capturing_group as Matcher),
    (TokenKind::Group, match_group as Matcher),
    (TokenKind::Word, match_word as Matcher),
    (TokenKind::Single, match_single as Matcher),
];

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn match_escape(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    if chars.next()? != '\\' {
        return None;
    }
    let escaped = chars.next()?;
    if is_line_terminator(escaped) {
        return None;
    }
    Some(1 + escaped.len_utf8())
}

/// Shortest run from `open` to the first `close` at or after `body_start`,
/// without crossing a line terminator.
fn match_delimited(rest: &str, open: &str, close: char, body_start: usize) -> Option<usize> {
    if !rest.starts_with(open) {
        return None;
    }
    for (offset, c) in rest[body_start..].char_indices() {
        if c == close {
            return Some(body_start + offset + c.len_utf8());
        }
        if is_line_terminator(c) {
            return None;
        }
    }
    None
}

fn match_bracket_set(rest: &str) -> Option<usize> {
    match_delimited(rest, "[", ']', 1)
}

fn match_non_capturing_group(rest: &str) -> Option<usize> {
    match_delimited(rest, "(?:", ')', 3)
}

fn match_group(rest: &str) -> Option<usize> {
    match_delimited(rest, "(", ')', 1)
}

fn match_word(rest: &str) -> Option<usize> {
    let len = rest
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(rest.len(), |(i, _)| i);
    (len > 0).then_some(len)
}

fn match_single(rest: &str) -> Option<usize> {
    rest.chars().next().map(char::len_utf8)
}

/// Iterator over the tokens of a pattern source.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.position..];
        if rest.is_empty() {
            return None;
        }

        let (kind, len) = MATCHERS
            .iter()
            .find_map(|(kind, matcher)| matcher(rest).map(|len| (*kind, len)))?;

        self.position += len;
        Some(Token {
            kind,
            text: &rest[..len],
        })
    }
}

/// Split `source` into tokens.
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}
