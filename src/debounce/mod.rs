//! Debounced value scheduling.
//!
//! Turns a rapid stream of values (keystrokes) into "settled" emissions
//! that only happen once input has been quiet for a configured delay.
//!
//! - [`DebounceConfig`] - delay, leading/trailing edges, and max wait
//! - [`Debouncer`] - the scheduler owning the pending value and its timer

mod config;
mod scheduler;

pub use config::DebounceConfig;
pub use scheduler::Debouncer;
