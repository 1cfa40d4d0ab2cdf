//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Regex Playground - test, explain, and save regular expressions.
#[derive(Debug, Parser)]
#[command(name = "regex-playground")]
#[command(
    author,
    version,
    about = "Regex Playground - test, explain, and save regular expressions",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .regex-playground/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Print results only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a regex against some text and list the matches
    Match(MatchArgs),

    /// Explain the parts of a regex in plain language
    Explain(ExplainArgs),

    /// Show the recent regex history
    History(HistoryArgs),

    /// Manage saved patterns
    Patterns(PatternsArgs),

    /// Interactive session reading commands from stdin
    Session(SessionArgs),

    /// Show a regex challenge or submit an answer to it
    Challenge(ChallengeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `match` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct MatchArgs {
    /// The regular expression
    pub regex: String,

    /// Flags such as "gi" (defaults to the configured default flags)
    #[arg(short, long)]
    pub flags: Option<String>,

    /// Text to search
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub text: Option<String>,

    /// Read the text to search from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Treat the regex as a literal string
    #[arg(long)]
    pub literal: bool,

    /// Don't record the regex in history
    #[arg(long)]
    pub no_history: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `explain` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExplainArgs {
    /// The regular expression
    pub regex: String,
}

/// Arguments for the `history` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `patterns` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PatternsArgs {
    #[command(subcommand)]
    pub action: PatternsAction,
}

/// Saved pattern operations.
#[derive(Debug, Clone, Subcommand)]
pub enum PatternsAction {
    /// List saved and built-in patterns
    List,

    /// Save a pattern, replacing any pattern with the same name
    Save {
        /// Pattern name
        name: String,
        /// The regular expression
        regex: String,
        /// Flags (defaults to the configured default flags)
        #[arg(short, long)]
        flags: Option<String>,
    },

    /// Delete a saved pattern
    Delete {
        /// Pattern name
        name: String,
    },

    /// Show a saved or built-in pattern with its explanation
    Show {
        /// Pattern name
        name: String,
    },
}

/// Arguments for the `session` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SessionArgs {
    /// Override the history debounce delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay: Option<u64>,
}

/// Arguments for the `challenge` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ChallengeArgs {
    /// Your answer; omit to show the challenge
    pub regex: Option<String>,

    /// Challenge number, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// List every challenge
    #[arg(long, conflicts_with = "regex")]
    pub list: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
