//! Challenge command implementation.
//!
//! The `regex-playground challenge` command shows a regex exercise, or
//! judges an answer against it.

use crate::cli::args::ChallengeArgs;
use crate::error::Result;
use crate::playground::{ChallengeBoard, Verdict, CHALLENGES};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The challenge command implementation.
pub struct ChallengeCommand {
    args: ChallengeArgs,
}

impl ChallengeCommand {
    /// Create a new challenge command.
    pub fn new(args: ChallengeArgs) -> Self {
        Self { args }
    }

    fn list(&self, ui: &mut dyn UserInterface) -> CommandResult {
        ui.show_header("Challenges");
        for (i, challenge) in CHALLENGES.iter().enumerate() {
            ui.show_item(&(i + 1).to_string(), challenge.description);
        }
        ui.show_hint("Try one with: regex-playground challenge -n <number>");
        CommandResult::success()
    }

    fn show_task(&self, board: &ChallengeBoard, ui: &mut dyn UserInterface) {
        let challenge = board.current();
        ui.show_header(&format!(
            "Challenge {} of {}",
            board.index() + 1,
            CHALLENGES.len()
        ));
        ui.show_item("task", challenge.description);
        ui.show_item("text", challenge.test_string);
    }
}

impl Command for ChallengeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.list {
            return Ok(self.list(ui));
        }

        let Some(board) = self
            .args
            .number
            .checked_sub(1)
            .and_then(ChallengeBoard::at)
        else {
            ui.error(&format!(
                "No challenge number {}; choose 1 to {}",
                self.args.number,
                CHALLENGES.len()
            ));
            return Ok(CommandResult::failure(1));
        };

        self.show_task(&board, ui);

        let Some(regex) = &self.args.regex else {
            ui.show_hint(&format!(
                "Submit an answer with: regex-playground challenge -n {} '<regex>'",
                board.index() + 1
            ));
            return Ok(CommandResult::success());
        };

        let verdict = board.submit(regex);
        match verdict {
            Verdict::Correct => ui.success(verdict.message()),
            Verdict::Incorrect => ui.warning(verdict.message()),
            Verdict::InvalidRegex => ui.error(verdict.message()),
        }

        if !verdict.is_correct() {
            return Ok(CommandResult::failure(1));
        }
        if board.has_next() {
            ui.show_hint(&format!(
                "Next: regex-playground challenge -n {}",
                board.index() + 2
            ));
        }
        Ok(CommandResult::success())
    }
}
