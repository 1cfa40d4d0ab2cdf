//! Shared display helpers for playground output.
//!
//! Used by `match`, `patterns show`, and `session` so a playground state
//! renders the same way everywhere.

use crate::explain::NO_EXPLANATION;
use crate::playground::PlaygroundState;
use crate::ui::{format_millis, UserInterface};

/// "1 match" / "3 matches".
pub fn count_label(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{} matches", count)
    }
}

/// One-line summary of the state's match results.
pub fn match_summary(state: &PlaygroundState) -> String {
    let count = count_label(state.matches().len());
    match state.execution_time_ms() {
        Some(ms) => format!("{} in {}", count, format_millis(ms)),
        None => count,
    }
}

/// Show explanation lines, or the fallback when there are none.
pub fn show_explanations(ui: &mut dyn UserInterface, explanations: &[String]) {
    if explanations.is_empty() {
        ui.message(NO_EXPLANATION);
        return;
    }
    for line in explanations {
        ui.message(&format!("  • {}", line));
    }
}

/// Show the state's matches, or its error when the regex is invalid.
pub fn show_results(ui: &mut dyn UserInterface, state: &PlaygroundState) {
    if let Some(error) = state.last_error() {
        ui.error(error);
        return;
    }
    for m in state.matches() {
        ui.show_match(m);
    }
    if state.matches().is_empty() {
        ui.warning(&match_summary(state));
    } else {
        ui.success(&match_summary(state));
    }
}
