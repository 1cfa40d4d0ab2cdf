//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`ProjectContext`] for the project root and its configuration
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::{load_config, validate, PlaygroundConfig};
use crate::error::Result;
use crate::playground::{PlaygroundState, Session};
use crate::storage::FileStorage;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where a command runs: the project root and an optional config override.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl ProjectContext {
    pub fn new(project_root: &Path, config_path: Option<&Path>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate the configuration.
    pub fn load_config(&self) -> Result<PlaygroundConfig> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        validate(&config)?;
        Ok(config)
    }

    /// File storage for this project's persisted collections.
    pub fn storage(&self, config: &PlaygroundConfig) -> FileStorage {
        let dir = config.storage.resolve(&self.project_root);
        debug!("Using storage at {}", dir.display());
        FileStorage::new(dir)
    }

    /// Open a playground session backed by this project's storage.
    pub fn open_session(&self, config: &PlaygroundConfig) -> Session<FileStorage> {
        let state = PlaygroundState::new().with_default_flags(&config.default_flags);
        Session::with_state(state, self.storage(config), config.debounce.clone())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: ProjectContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            context: ProjectContext::new(&project_root, None),
        }
    }

    /// Load config from exactly this file instead of discovering it.
    pub fn with_config(mut self, config_path: Option<PathBuf>) -> Self {
        self.context.config_path = config_path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        self.context.project_root()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let context = self.context.clone();
        match &cli.command {
            Commands::Match(args) => {
                super::matches::MatchCommand::new(context, args.clone()).execute(ui)
            }
            Commands::Explain(args) => super::explain::ExplainCommand::new(args.clone()).execute(ui),
            Commands::History(args) => {
                super::history::HistoryCommand::new(context, args.clone()).execute(ui)
            }
            Commands::Patterns(args) => {
                super::patterns::PatternsCommand::new(context, args.clone()).execute(ui)
            }
            Commands::Session(args) => {
                super::session::SessionCommand::new(context, args.clone()).execute(ui)
            }
            Commands::Challenge(args) => {
                super::challenge::ChallengeCommand::new(args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlaygroundError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn context_uses_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        let context = ProjectContext::new(temp.path(), None);

        let config = context.load_config().unwrap();
        assert_eq!(config, PlaygroundConfig::default());
        assert_eq!(
            context.storage(&config).dir(),
            temp.path().join(".regex-playground").join("data")
        );
    }

    #[test]
    fn context_rejects_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "default_flags: zz").unwrap();
        let context = ProjectContext::new(temp.path(), Some(&path));

        let result = context.load_config();
        assert!(matches!(result, Err(PlaygroundError::ConfigValidationError { .. })));
    }

    #[test]
    fn session_uses_configured_default_flags() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "default_flags: gi").unwrap();
        let context = ProjectContext::new(temp.path(), Some(&path));

        let config = context.load_config().unwrap();
        let session = context.open_session(&config);
        assert_eq!(session.state().flags(), "gi");
    }
}
