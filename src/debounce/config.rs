//! Debounce configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the debounce scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebounceConfig {
    /// Quiet period in milliseconds.
    ///
    /// After a call, the scheduler waits this long before emitting.
    /// Additional calls reset the timer.
    pub delay_ms: u64,

    /// Emit immediately on the first call of a burst.
    #[serde(alias = "immediate")]
    pub leading: bool,

    /// Emit the latest value once the quiet period elapses.
    pub trailing: bool,

    /// Maximum time between emissions under continuous input.
    ///
    /// Values below `delay_ms` are raised to `delay_ms`.
    pub max_wait_ms: Option<u64>,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            delay_ms: Self::DEFAULT_DELAY_MS,
            leading: false,
            trailing: true,
            max_wait_ms: None,
        }
    }
}

impl DebounceConfig {
    /// Default quiet period.
    pub const DEFAULT_DELAY_MS: u64 = 250;

    /// Create a trailing-only config with the given delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            ..Default::default()
        }
    }

    /// Enable or disable leading-edge emission.
    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    /// Enable or disable trailing-edge emission.
    pub fn trailing(mut self, trailing: bool) -> Self {
        self.trailing = trailing;
        self
    }

    /// Set the maximum wait between emissions.
    pub fn max_wait(mut self, max_wait_ms: u64) -> Self {
        self.max_wait_ms = Some(max_wait_ms);
        self
    }

    /// The quiet period as a [`Duration`].
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// The effective maximum wait, never shorter than the delay.
    pub fn max_wait_duration(&self) -> Option<Duration> {
        self.max_wait_ms
            .map(|ms| Duration::from_millis(ms.max(self.delay_ms)))
    }
}
