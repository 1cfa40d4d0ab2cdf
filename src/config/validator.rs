//! Configuration validation rules.
//!
//! - `debounce.delay_ms` must be positive
//! - `debounce.max_wait_ms`, when set, must be positive
//! - `default_flags` must be a valid flag set

use crate::config::schema::PlaygroundConfig;
use crate::error::{PlaygroundError, Result};
use crate::matcher::Flags;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Dotted path of the offending key
    pub key: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, key: &str, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PlaygroundConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let debounce = &config.debounce;

    if debounce.delay_ms == 0 {
        errors.push(ValidationError::new(
            "zero-delay",
            "debounce.delay_ms",
            "debounce.delay_ms must be greater than 0",
        ));
    }

    if debounce.max_wait_ms == Some(0) {
        errors.push(ValidationError::new(
            "zero-max-wait",
            "debounce.max_wait_ms",
            "debounce.max_wait_ms must be greater than 0 when set",
        ));
    }

    if let Err(e) = Flags::parse(&config.default_flags) {
        errors.push(ValidationError::new(
            "invalid-flags",
            "default_flags",
            format!("default_flags: {}", e.diagnostic()),
        ));
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &PlaygroundConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PlaygroundError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
