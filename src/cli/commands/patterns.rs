//! Patterns command implementation.
//!
//! The `regex-playground patterns` command manages saved patterns:
//! `list`, `save`, `delete`, and `show`. Built-in patterns are listed and
//! shown alongside saved ones but cannot be deleted.

use std::time::Instant;

use crate::cli::args::{PatternsAction, PatternsArgs};
use crate::config::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};
use crate::matcher::CompiledPattern;
use crate::playground::{builtin, Intent, Session, BUILTIN_PATTERNS};
use crate::storage::FileStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};
use super::display::show_explanations;

/// The patterns command implementation.
pub struct PatternsCommand {
    context: ProjectContext,
    args: PatternsArgs,
}

impl PatternsCommand {
    /// Create a new patterns command.
    pub fn new(context: ProjectContext, args: PatternsArgs) -> Self {
        Self { context, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PatternsArgs {
        &self.args
    }

    fn list(&self, session: &Session<FileStorage>, ui: &mut dyn UserInterface) -> CommandResult {
        let saved = session.state().saved_patterns();

        ui.show_header("Saved Patterns");
        if saved.is_empty() {
            ui.message("No saved patterns.");
        }
        for pattern in saved {
            ui.show_item(&pattern.name, &format!("/{}/{}", pattern.regex, pattern.flags));
        }

        ui.show_header("Built-in Patterns");
        for pattern in BUILTIN_PATTERNS {
            ui.show_item(pattern.name, &format!("/{}/  {}", pattern.regex, pattern.description));
        }

        CommandResult::success()
    }

    fn save(
        &self,
        mut session: Session<FileStorage>,
        config: &PlaygroundConfig,
        name: &str,
        regex: &str,
        flags: Option<&str>,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if name.is_empty() || regex.is_empty() {
            ui.error("A pattern needs both a name and a regex.");
            return Ok(CommandResult::failure(1));
        }

        let flags = flags.unwrap_or(config.default_flags.as_str());
        if let Err(e) = CompiledPattern::new(regex, flags) {
            ui.warning(&format!("Pattern does not compile: {}", e.diagnostic()));
        }

        let replacing = session.state().saved_patterns().iter().any(|p| p.name == name);
        session.dispatch(
            Intent::SavePattern {
                name: name.to_string(),
                regex: regex.to_string(),
                flags: flags.to_string(),
            },
            Instant::now(),
        );
        session.persist()?;

        if replacing {
            ui.success(&format!("Updated pattern '{}'", name));
        } else {
            ui.success(&format!("Saved pattern '{}'", name));
        }
        Ok(CommandResult::success())
    }

    fn delete(
        &self,
        mut session: Session<FileStorage>,
        name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        if !session.state().saved_patterns().iter().any(|p| p.name == name) {
            if builtin(name).is_some() {
                ui.error(&format!("'{}' is a built-in pattern and cannot be deleted.", name));
                return Ok(CommandResult::failure(1));
            }
            return Err(PlaygroundError::UnknownPattern {
                name: name.to_string(),
            });
        }

        session.dispatch(Intent::DeletePattern(name.to_string()), Instant::now());
        session.persist()?;
        ui.success(&format!("Deleted pattern '{}'", name));
        Ok(CommandResult::success())
    }

    fn show(
        &self,
        mut session: Session<FileStorage>,
        name: &str,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let is_saved = session.state().saved_patterns().iter().any(|p| p.name == name);
        let description = match builtin(name) {
            _ if is_saved => None,
            Some(pattern) => Some(pattern.description),
            None => {
                return Err(PlaygroundError::UnknownPattern {
                    name: name.to_string(),
                })
            }
        };

        session.dispatch(Intent::LoadPattern(name.to_string()), Instant::now());
        let state = session.state();

        ui.show_header(name);
        ui.show_item("regex", state.regex());
        ui.show_item("flags", state.flags());
        if let Some(description) = description {
            ui.show_item("description", description);
        }
        show_explanations(ui, state.explanations());

        Ok(CommandResult::success())
    }
}

impl Command for PatternsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.context.load_config()?;
        let session = self.context.open_session(&config);

        match &self.args.action {
            PatternsAction::List => Ok(self.list(&session, ui)),
            PatternsAction::Save { name, regex, flags } => {
                self.save(session, &config, name, regex, flags.as_deref(), ui)
            }
            PatternsAction::Delete { name } => self.delete(session, name, ui),
            PatternsAction::Show { name } => self.show(session, name, ui),
        }
    }
}
