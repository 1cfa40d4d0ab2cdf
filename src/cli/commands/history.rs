//! History command implementation.
//!
//! The `regex-playground history` command shows recently used regexes,
//! most recent first.

use crate::cli::args::HistoryArgs;
use crate::error::Result;
use crate::playground::History;
use crate::storage::{Persistence, REGEX_HISTORY_KEY};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The history command implementation.
pub struct HistoryCommand {
    context: ProjectContext,
    args: HistoryArgs,
}

impl HistoryCommand {
    /// Create a new history command.
    pub fn new(context: ProjectContext, args: HistoryArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &HistoryArgs {
        &self.args
    }
}

impl Command for HistoryCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let persistence = Persistence::new(self.context.storage(&config));
        let history = History::from_entries(persistence.load::<String>(REGEX_HISTORY_KEY));

        if history.is_empty() {
            ui.message("No regex history yet.");
            ui.show_hint("Run `regex-playground match <regex> --text <text>` to start one.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Regex History");
        let limit = self.args.limit.unwrap_or(History::LIMIT);
        for (i, regex) in history.entries().iter().take(limit).enumerate() {
            ui.message(&format!("{:>3}. {}", i + 1, regex));
        }

        Ok(CommandResult::success())
    }
}
