//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
///
/// Results (matches, explanations, listings) and errors are always shown;
/// the mode only controls decoration around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Headers, status lines, and hints.
    #[default]
    Normal,
    /// Results and errors only.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick the mode for the `--quiet` flag.
    pub fn from_quiet(quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows headers, status, and hints.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
