//! Explain command implementation.
//!
//! The `regex-playground explain` command describes each part of a regex.

use crate::cli::args::ExplainArgs;
use crate::error::Result;
use crate::explain::explain;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_explanations;

/// The explain command implementation.
pub struct ExplainCommand {
    args: ExplainArgs,
}

impl ExplainCommand {
    /// Create a new explain command.
    pub fn new(args: ExplainArgs) -> Self {
        Self { args }
    }
}

impl Command for ExplainCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header(&format!("/{}/", self.args.regex));
        show_explanations(ui, &explain(&self.args.regex));
        Ok(CommandResult::success())
    }
}
