//! Terminal output for the CLI.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] writing styled output to the terminal
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use regex_playground::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_header("Matches");
//! ui.success("2 matches");
//! assert!(ui.has_success("2 matches"));
//! ```

pub mod format;
pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use format::{format_duration, format_millis};
pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, PlaygroundTheme};

use crate::matcher::Match;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a line of results. Shown in every mode.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a hint suggesting what to do next.
    fn show_hint(&mut self, hint: &str);

    /// Show a single match. Shown in every mode.
    fn show_match(&mut self, m: &Match);

    /// Show a key-value line. Shown in every mode.
    fn show_item(&mut self, key: &str, value: &str);
}
