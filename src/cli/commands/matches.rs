//! Match command implementation.
//!
//! The `regex-playground match` command runs a regex over text through the
//! playground state machine and lists every match with its byte offset.
//! The regex is recorded in history unless `--no-history` is given.

use std::fs;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::cli::args::MatchArgs;
use crate::error::Result;
use crate::matcher::{escape_regex, Match};
use crate::playground::{Intent, PlaygroundState};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::show_results;

/// The match command implementation.
pub struct MatchCommand {
    context: ProjectContext,
    args: MatchArgs,
}

/// JSON form of a match run.
#[derive(Debug, Serialize)]
struct MatchReport<'a> {
    regex: &'a str,
    flags: &'a str,
    valid: bool,
    error: Option<&'a str>,
    matches: &'a [Match],
    execution_time_ms: Option<f64>,
}

impl<'a> MatchReport<'a> {
    fn from_state(state: &'a PlaygroundState) -> Self {
        Self {
            regex: state.regex(),
            flags: state.flags(),
            valid: state.is_valid(),
            error: state.last_error(),
            matches: state.matches(),
            execution_time_ms: state.execution_time_ms(),
        }
    }
}

impl MatchCommand {
    /// Create a new match command.
    pub fn new(context: ProjectContext, args: MatchArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &MatchArgs {
        &self.args
    }

    fn read_text(&self) -> Result<String> {
        match (&self.args.text, &self.args.file) {
            (Some(text), _) => Ok(text.clone()),
            (None, Some(path)) => {
                debug!("Reading text from {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            (None, None) => Ok(String::new()),
        }
    }

    fn regex(&self) -> String {
        if self.args.literal {
            escape_regex(&self.args.regex)
        } else {
            self.args.regex.clone()
        }
    }
}

impl Command for MatchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let text = self.read_text()?;
        let mut session = self.context.open_session(&config);

        let now = Instant::now();
        if let Some(flags) = &self.args.flags {
            session.dispatch(Intent::SetFlags(flags.clone()), now);
        }
        session.dispatch(Intent::SetText(text), now);
        session.dispatch(Intent::SetRegex(self.regex()), now);

        if self.args.no_history {
            session.cancel_pending();
        } else if session.flush(now) {
            session.persist()?;
        }

        let state = session.state();
        if self.args.json {
            let json = serde_json::to_string_pretty(&MatchReport::from_state(state))
                .map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            ui.show_header(&format!("/{}/{}", state.regex(), state.flags()));
            show_results(ui, state);
        }

        if state.is_valid() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
