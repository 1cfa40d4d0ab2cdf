//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    ChallengeArgs, Cli, Commands, CompletionsArgs, ExplainArgs, HistoryArgs, MatchArgs,
    PatternsAction, PatternsArgs, SessionArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, ProjectContext};
