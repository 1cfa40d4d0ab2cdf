//! Error types for playground operations.
//!
//! This module defines [`PlaygroundError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `PatternSyntax` is recovered by the state machine and surfaced as the
//!   playground's `last_error`, never propagated to the process
//! - `StorageRead` is recovered by the persistence layer (empty collection)
//! - Everything else belongs to the CLI and config layers and is reported
//!   to the user

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for playground operations.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The pattern or its flags failed to compile.
    #[error("Invalid regular expression: {message}")]
    PatternSyntax { message: String },

    /// A persisted collection could not be read or decoded.
    #[error("Failed to read stored '{key}': {message}")]
    StorageRead { key: String, message: String },

    /// A persisted collection could not be written.
    #[error("Failed to write stored '{key}': {message}")]
    StorageWrite { key: String, message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Neither a saved nor a built-in pattern has this name.
    #[error("Unknown pattern: {name}")]
    UnknownPattern { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaygroundError {
    /// Build a [`PlaygroundError::PatternSyntax`] from any diagnostic.
    pub fn pattern_syntax(message: impl Into<String>) -> Self {
        Self::PatternSyntax {
            message: message.into(),
        }
    }

    /// The user-facing diagnostic for this error.
    ///
    /// For pattern errors this is the engine's message without the
    /// "Invalid regular expression" prefix.
    pub fn diagnostic(&self) -> String {
        match self {
            Self::PatternSyntax { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for playground operations.
pub type Result<T> = std::result::Result<T, PlaygroundError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_syntax_displays_message() {
        let err = PlaygroundError::pattern_syntax("unclosed character class");
        assert!(err.to_string().contains("unclosed character class"));
        assert!(err.to_string().starts_with("Invalid regular expression"));
    }

    #[test]
    fn diagnostic_strips_prefix_for_pattern_errors() {
        let err = PlaygroundError::pattern_syntax("unclosed group");
        assert_eq!(err.diagnostic(), "unclosed group");
    }

    #[test]
    fn diagnostic_uses_display_for_other_errors() {
        let err = PlaygroundError::UnknownPattern {
            name: "zip".into(),
        };
        assert_eq!(err.diagnostic(), "Unknown pattern: zip");
    }

    #[test]
    fn storage_read_displays_key_and_message() {
        let err = PlaygroundError::StorageRead {
            key: "regexHistory".into(),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("regexHistory"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PlaygroundError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PlaygroundError = io_err.into();
        assert!(matches!(err, PlaygroundError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PlaygroundError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
