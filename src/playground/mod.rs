//! The playground state machine.
//!
//! - [`PlaygroundState`] - the aggregate and its [`Intent`] transitions
//! - [`History`] - bounded regex history
//! - [`library`] - saved patterns and the built-in pattern library
//! - [`challenge`] - fixed regex exercises and answer checking
//! - [`Session`] - runs transition effects against a debouncer and storage
//! - [`runtime`] - a channel-driven event loop around a session
//!
//! # Example
//!
//! ```
//! use regex_playground::playground::{Intent, PlaygroundState};
//!
//! let mut state = PlaygroundState::new();
//! state.apply(Intent::SetRegex("[".into()));
//! state.apply(Intent::SetText("abc".into()));
//!
//! assert!(!state.is_valid());
//! assert!(state.last_error().is_some());
//! assert!(state.matches().is_empty());
//! ```

pub mod challenge;
mod history;
pub mod library;
pub mod runtime;
mod session;
mod state;

pub use challenge::{Challenge, ChallengeBoard, Verdict, CHALLENGES};
pub use history::History;
pub use library::{builtin, BuiltinPattern, SavedPattern, BUILTIN_PATTERNS, NO_SELECTION};
pub use runtime::{run_event_loop, Event, Update};
pub use session::Session;
pub use state::{Effect, Intent, PlaygroundState};
