//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and hands each one a
//! [`ProjectContext`] for loading config and opening storage.

pub mod challenge;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod explain;
pub mod history;
pub mod matches;
pub mod patterns;
pub mod session;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};
