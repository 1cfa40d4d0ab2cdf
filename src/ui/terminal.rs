//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, PlaygroundTheme, UserInterface};
use crate::matcher::Match;

/// Terminal UI implementation.
///
/// Results go to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: PlaygroundTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI, colored when the terminal supports it.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_colors(mode, should_use_colors())
    }

    /// Create a terminal UI with colors explicitly on or off.
    pub fn with_colors(mode: OutputMode, colors: bool) -> Self {
        let theme = if colors {
            PlaygroundTheme::new()
        } else {
            PlaygroundTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.hint.apply_to(hint)).ok();
        }
    }

    fn show_match(&mut self, m: &Match) {
        writeln!(self.out, "{}", self.theme.format_match(m.index, &m.value)).ok();
    }

    fn show_item(&mut self, key: &str, value: &str) {
        writeln!(self.out, "{}", self.theme.format_item(key, value)).ok();
    }
}

/// Create the terminal UI for a CLI invocation.
///
/// `no_color` forces plain output even on a color-capable terminal.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    let colors = !no_color && should_use_colors();
    Box::new(TerminalUI::with_colors(mode, colors))
}
