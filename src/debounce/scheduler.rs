//! Deadline-driven debounce scheduler.
//!
//! The scheduler owns the latest pending value and a single timer. It never
//! sleeps or spawns anything: callers pass the current [`Instant`] to every
//! operation and ask [`Debouncer::deadline`] when to come back. This keeps
//! the emission logic deterministic and lets an event loop (or a test) drive
//! it with whatever clock it likes.

use std::time::Instant;

use tracing::debug;

use super::DebounceConfig;

/// The one timer a scheduler may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timer {
    /// When the quiet period ends, absent further calls.
    quiet_deadline: Instant,
    /// When `max_wait` forces an emission, if configured.
    max_deadline: Option<Instant>,
}

impl Timer {
    fn next(&self) -> Instant {
        match self.max_deadline {
            Some(max) if max < self.quiet_deadline => max,
            _ => self.quiet_deadline,
        }
    }
}

/// Coalesces a burst of values into settled emissions.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use regex_playground::debounce::{DebounceConfig, Debouncer};
///
/// let start = Instant::now();
/// let mut debouncer = Debouncer::new(DebounceConfig::with_delay(250));
///
/// debouncer.schedule("a", start);
/// debouncer.schedule("ab", start + Duration::from_millis(100));
///
/// assert_eq!(debouncer.poll(start + Duration::from_millis(300)), None);
/// assert_eq!(debouncer.poll(start + Duration::from_millis(350)), Some("ab"));
/// ```
#[derive(Debug)]
pub struct Debouncer<T> {
    config: DebounceConfig,
    pending: Option<T>,
    timer: Option<Timer>,
    last_emit: Option<Instant>,
}

impl<T> Debouncer<T> {
    /// Create an idle scheduler.
    pub fn new(config: DebounceConfig) -> Self {
        Self {
            config,
            pending: None,
            timer: None,
            last_emit: None,
        }
    }

    /// The scheduler's configuration.
    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    /// Whether a timer is armed.
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// When [`poll`](Self::poll) should next be called, if ever.
    pub fn deadline(&self) -> Option<Instant> {
        self.timer.map(|t| t.next())
    }

    /// When the last emission happened.
    pub fn last_emit(&self) -> Option<Instant> {
        self.last_emit
    }

    /// Record `value` as the latest pending value and restart the quiet period.
    ///
    /// Returns the value right away only for a leading-edge emission, which
    /// happens when `leading` is set and no timer was armed.
    pub fn schedule(&mut self, value: T, now: Instant) -> Option<T> {
        let burst_start = self.timer.is_none();
        let max_wait = self.config.max_wait_duration();

        // `max_wait` counts from the last emission; a burst with none behind
        // it (or one that leads) counts from now.
        let max_deadline = match self.timer {
            Some(timer) => timer.max_deadline,
            None => {
                let since = match self.last_emit {
                    Some(at) if !self.config.leading => at,
                    _ => now,
                };
                max_wait.map(|wait| since + wait)
            }
        };
        self.timer = Some(Timer {
            quiet_deadline: now + self.config.delay(),
            max_deadline,
        });

        if burst_start && self.config.leading {
            debug!("Debounce leading emission");
            self.pending = None;
            self.last_emit = Some(now);
            return Some(value);
        }

        self.pending = Some(value);
        None
    }

    /// Fire the timer if it is due.
    ///
    /// A due quiet period disarms the timer and emits the pending value
    /// (when `trailing` is set). A due `max_wait` emits the pending value
    /// but keeps the timer armed, since input is still arriving.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let timer = self.timer?;

        if now >= timer.quiet_deadline {
            self.timer = None;
            let value = self.pending.take();
            if !self.config.trailing {
                return None;
            }
            return self.emit(value, now);
        }

        if let Some(max_deadline) = timer.max_deadline {
            if now >= max_deadline {
                self.timer = Some(Timer {
                    quiet_deadline: timer.quiet_deadline,
                    max_deadline: self.config.max_wait_duration().map(|wait| now + wait),
                });
                let value = self.pending.take();
                debug!("Debounce max wait elapsed");
                return self.emit(value, now);
            }
        }

        None
    }

    /// Perform the pending emission now and disarm the timer.
    ///
    /// No-op when nothing is pending.
    pub fn flush(&mut self, now: Instant) -> Option<T> {
        self.timer.take()?;
        let value = self.pending.take();
        if !self.config.trailing {
            return None;
        }
        self.emit(value, now)
    }

    /// Discard the timer and the pending value. Idempotent.
    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("Debounce cancelled");
        }
        self.pending = None;
    }

    fn emit(&mut self, value: Option<T>, now: Instant) -> Option<T> {
        if value.is_some() {
            self.last_emit = Some(now);
        }
        value
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
