//! Single-threaded event loop for a [`Session`].
//!
//! Events arrive over a channel and are processed one at a time to
//! completion. While a history entry is pending, the loop waits on the
//! channel only until the debounce deadline, then ticks the session; the
//! timer callback is just another event in the same sequence.

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Instant;

use tracing::debug;

use super::{Intent, PlaygroundState, Session};
use crate::storage::Storage;

/// Something for the event loop to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Dispatch a user intent.
    Intent(Intent),
    /// Settle pending history now.
    Flush,
    /// Stop the loop.
    Shutdown,
}

/// Why the observer is being called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// An intent was applied.
    Intent,
    /// A pending history entry settled.
    Settled,
}

/// Run `session` until [`Event::Shutdown`] arrives or every sender is gone.
///
/// `observe` sees the state after each change. On exit any pending history
/// entry is cancelled, so nothing settles into a session that is going away.
pub fn run_event_loop<S, F>(session: &mut Session<S>, events: &Receiver<Event>, mut observe: F)
where
    S: Storage,
    F: FnMut(&PlaygroundState, Update),
{
    loop {
        let received = match session.next_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match events.recv_timeout(timeout) {
                    Ok(event) => Some(event),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            None => match events.recv() {
                Ok(event) => Some(event),
                Err(_) => break,
            },
        };

        match received {
            Some(Event::Intent(intent)) => {
                session.dispatch(intent, Instant::now());
                observe(session.state(), Update::Intent);
            }
            Some(Event::Flush) => {
                if session.flush(Instant::now()) {
                    observe(session.state(), Update::Settled);
                }
            }
            Some(Event::Shutdown) => break,
            None => {}
        }

        // Continuous input never times out the wait, so check the deadline
        // after every event as well.
        if session.tick(Instant::now()) {
            observe(session.state(), Update::Settled);
        }
    }

    session.cancel_pending();
    debug!("Event loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::DebounceConfig;
    use crate::storage::MemoryStorage;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    fn set_regex(regex: &str) -> Event {
        Event::Intent(Intent::SetRegex(regex.to_string()))
    }

    #[test]
    fn burst_settles_after_quiet_period() {
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(20));
        let (tx, rx) = mpsc::channel();

        for regex in ["a", "ab", "abc"] {
            tx.send(set_regex(regex)).unwrap();
        }
        let closer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(300));
            let _ = tx.send(Event::Shutdown);
        });

        let mut updates = Vec::new();
        run_event_loop(&mut session, &rx, |_, update| updates.push(update));
        closer.join().unwrap();

        assert_eq!(session.state().history(), ["abc"]);
        assert_eq!(updates.iter().filter(|u| **u == Update::Intent).count(), 3);
        assert_eq!(updates.iter().filter(|u| **u == Update::Settled).count(), 1);
    }

    #[test]
    fn shutdown_cancels_pending_history() {
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(60_000));
        let (tx, rx) = mpsc::channel();

        tx.send(set_regex("a")).unwrap();
        tx.send(Event::Shutdown).unwrap();
        run_event_loop(&mut session, &rx, |_, _| {});

        assert!(session.state().history().is_empty());
        assert!(!session.has_pending());
    }

    #[test]
    fn flush_event_settles_without_waiting() {
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::with_delay(60_000));
        let (tx, rx) = mpsc::channel();

        tx.send(set_regex("a")).unwrap();
        tx.send(Event::Flush).unwrap();
        tx.send(Event::Shutdown).unwrap();
        run_event_loop(&mut session, &rx, |_, _| {});

        assert_eq!(session.state().history(), ["a"]);
    }

    #[test]
    fn disconnect_stops_the_loop() {
        let mut session = Session::open(MemoryStorage::new(), DebounceConfig::default());
        let (tx, rx) = mpsc::channel();

        tx.send(Event::Intent(Intent::SetText("abc".into()))).unwrap();
        drop(tx);

        let mut seen = Vec::new();
        run_event_loop(&mut session, &rx, |state, _| seen.push(state.text().to_string()));
        assert_eq!(seen, vec!["abc"]);
    }
}
