//! A playground session: state, history debouncer, and persistence.
//!
//! The session is the effect runner for [`PlaygroundState::apply`]. It
//! feeds regex edits into the debouncer, turns settled values into
//! [`Intent::AddToHistory`], and writes collections out after they change.

use std::time::Instant;

use tracing::debug;

use super::{Effect, Intent, PlaygroundState, SavedPattern};
use crate::debounce::{DebounceConfig, Debouncer};
use crate::error::Result;
use crate::storage::{Persistence, Storage, REGEX_HISTORY_KEY, SAVED_PATTERNS_KEY};

/// A running playground.
///
/// # Example
///
/// ```
/// use std::time::{Duration, Instant};
/// use regex_playground::debounce::DebounceConfig;
/// use regex_playground::playground::{Intent, Session};
/// use regex_playground::storage::MemoryStorage;
///
/// let start = Instant::now();
/// let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(250));
///
/// session.dispatch(Intent::SetText("a1 b2".into()), start);
/// session.dispatch(Intent::SetRegex(r"\d".into()), start);
/// assert_eq!(session.state().matches().len(), 2);
/// assert!(session.state().history().is_empty());
///
/// session.tick(start + Duration::from_millis(250));
/// assert_eq!(session.state().history(), [r"\d"]);
/// ```
#[derive(Debug)]
pub struct Session<S: Storage> {
    state: PlaygroundState,
    debouncer: Debouncer<String>,
    persistence: Persistence<S>,
}

impl<S: Storage> Session<S> {
    /// Open a session seeded from `storage`.
    pub fn open(storage: S, debounce: DebounceConfig) -> Self {
        Self::with_state(PlaygroundState::new(), storage, debounce)
    }

    /// Open a session from a prepared state, seeding its collections from
    /// `storage`.
    pub fn with_state(state: PlaygroundState, storage: S, debounce: DebounceConfig) -> Self {
        let persistence = Persistence::new(storage);
        let saved: Vec<SavedPattern> = persistence.load(SAVED_PATTERNS_KEY);
        let history: Vec<String> = persistence.load(REGEX_HISTORY_KEY);
        debug!(
            "Session opened with {} saved pattern(s) and {} history entries",
            saved.len(),
            history.len()
        );

        Self {
            state: state.with_collections(saved, history),
            debouncer: Debouncer::new(debounce),
            persistence,
        }
    }

    /// The current state.
    pub fn state(&self) -> &PlaygroundState {
        &self.state
    }

    /// The persistence layer.
    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Whether a history entry is waiting to settle.
    pub fn has_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When [`tick`](Self::tick) should next run.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Apply `intent` and carry out its effects.
    pub fn dispatch(&mut self, intent: Intent, now: Instant) {
        for effect in self.state.apply(intent) {
            self.run_effect(effect, now);
        }
    }

    /// Settle the pending history entry if its timer is due.
    ///
    /// Returns whether anything settled.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(regex) => {
                self.settle(regex, now);
                true
            }
            None => false,
        }
    }

    /// Settle the pending history entry immediately.
    pub fn flush(&mut self, now: Instant) -> bool {
        match self.debouncer.flush(now) {
            Some(regex) => {
                self.settle(regex, now);
                true
            }
            None => false,
        }
    }

    /// Drop the pending history entry without recording it.
    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel();
    }

    /// Write both collections now, reporting failures.
    ///
    /// Effects only log write failures; one-shot callers use this to find
    /// out whether their change reached storage.
    pub fn persist(&self) -> Result<()> {
        self.persistence
            .try_save(SAVED_PATTERNS_KEY, self.state.saved_patterns())?;
        self.persistence
            .try_save(REGEX_HISTORY_KEY, self.state.history())
    }

    /// End the session. Pending history is discarded.
    pub fn close(mut self) -> PlaygroundState {
        self.debouncer.cancel();
        debug!("Session closed");
        std::mem::take(&mut self.state)
    }

    fn settle(&mut self, regex: String, now: Instant) {
        debug!("History settled on '{}'", regex);
        self.dispatch(Intent::AddToHistory(regex), now);
    }

    fn run_effect(&mut self, effect: Effect, now: Instant) {
        match effect {
            Effect::ScheduleHistory(regex) => {
                if let Some(leading) = self.debouncer.schedule(regex, now) {
                    self.settle(leading, now);
                }
            }
            Effect::PersistHistory => {
                self.persistence
                    .save(REGEX_HISTORY_KEY, self.state.history());
            }
            Effect::PersistSavedPatterns => {
                self.persistence
                    .save(SAVED_PATTERNS_KEY, self.state.saved_patterns());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn stored(storage: &MemoryStorage, key: &str) -> Option<String> {
        storage.read(key).unwrap()
    }

    #[test]
    fn burst_of_edits_settles_once() {
        let t0 = Instant::now();
        let storage = MemoryStorage::new();
        let mut session = Session::open(storage.clone(), DebounceConfig::with_delay(250));
        session.dispatch(Intent::SetText("abc".into()), t0);

        for (i, regex) in ["a", "ab", "abc"].into_iter().enumerate() {
            session.dispatch(Intent::SetRegex(regex.into()), t0 + ms(i as u64 * 100));
            assert_eq!(session.state().regex(), regex);
            assert_eq!(session.state().matches().len(), 1);
        }

        assert!(!session.tick(t0 + ms(449)));
        assert!(session.state().history().is_empty());
        assert!(session.tick(t0 + ms(450)));
        assert_eq!(session.state().history(), ["abc"]);
        assert_eq!(stored(&storage, REGEX_HISTORY_KEY), Some(r#"["abc"]"#.into()));
    }

    #[test]
    fn leading_edge_records_first_edit() {
        let t0 = Instant::now();
        let mut session = Session::open(
            MemoryStorage::new(),
            DebounceConfig::with_delay(250).leading(true),
        );

        session.dispatch(Intent::SetRegex("a".into()), t0);
        assert_eq!(session.state().history(), ["a"]);

        session.dispatch(Intent::SetRegex("ab".into()), t0 + ms(50));
        session.tick(t0 + ms(300));
        assert_eq!(session.state().history(), ["ab", "a"]);
    }

    #[test]
    fn flush_settles_immediately() {
        let t0 = Instant::now();
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(250));

        session.dispatch(Intent::SetRegex("x".into()), t0);
        assert!(session.flush(t0));
        assert_eq!(session.state().history(), ["x"]);
        assert!(!session.has_pending());
        assert!(!session.flush(t0));
    }

    #[test]
    fn cancel_drops_pending_history() {
        let t0 = Instant::now();
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(250));

        session.dispatch(Intent::SetRegex("x".into()), t0);
        session.cancel_pending();
        assert!(!session.tick(t0 + ms(1000)));
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn close_discards_pending_history() {
        let t0 = Instant::now();
        let storage = MemoryStorage::new();
        let mut session = Session::open(storage.clone(), DebounceConfig::with_delay(250));

        session.dispatch(Intent::SetRegex("x".into()), t0);
        let state = session.close();
        assert!(state.history().is_empty());
        assert_eq!(stored(&storage, REGEX_HISTORY_KEY), None);
    }

    #[test]
    fn seeds_from_storage() {
        let storage = MemoryStorage::with_entries([
            (SAVED_PATTERNS_KEY, r#"[{"name":"p","regex":"\\d+","flags":"g"}]"#),
            (REGEX_HISTORY_KEY, r#"["b","a"]"#),
        ]);
        let session = Session::open(storage, DebounceConfig::default());

        assert_eq!(session.state().saved_patterns(), [SavedPattern::new("p", r"\d+", "g")]);
        assert_eq!(session.state().history(), ["b", "a"]);
    }

    #[test]
    fn malformed_storage_starts_empty() {
        let storage = MemoryStorage::with_entries([
            (SAVED_PATTERNS_KEY, "not json"),
            (REGEX_HISTORY_KEY, r#"{"a":1}"#),
        ]);
        let session = Session::open(storage, DebounceConfig::default());

        assert!(session.state().saved_patterns().is_empty());
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn saved_patterns_are_persisted() {
        let t0 = Instant::now();
        let storage = MemoryStorage::new();
        let mut session = Session::open(storage.clone(), DebounceConfig::default());

        session.dispatch(
            Intent::SavePattern {
                name: "digits".into(),
                regex: r"\d+".into(),
                flags: "g".into(),
            },
            t0,
        );
        assert_eq!(
            stored(&storage, SAVED_PATTERNS_KEY),
            Some(r#"[{"name":"digits","regex":"\\d+","flags":"g"}]"#.into())
        );

        session.dispatch(Intent::DeletePattern("digits".into()), t0);
        assert_eq!(stored(&storage, SAVED_PATTERNS_KEY), Some("[]".into()));
    }

    #[test]
    fn loading_a_pattern_does_not_touch_history() {
        let t0 = Instant::now();
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::default());

        session.dispatch(Intent::LoadPattern("email".into()), t0);
        assert!(!session.has_pending());
        assert!(session.state().history().is_empty());
    }

    #[test]
    fn persist_writes_both_collections() {
        let storage = MemoryStorage::new();
        let session = Session::open(storage.clone(), DebounceConfig::default());

        session.persist().unwrap();
        assert_eq!(stored(&storage, SAVED_PATTERNS_KEY), Some("[]".into()));
        assert_eq!(stored(&storage, REGEX_HISTORY_KEY), Some("[]".into()));
    }

    #[test]
    fn custom_state_keeps_default_flags() {
        let state = PlaygroundState::new().with_default_flags("gm");
        let session = Session::with_state(state, MemoryStorage::new(), DebounceConfig::default());
        assert_eq!(session.state().flags(), "gm");
    }
}
