//! The dispatch loop: raw events in, actions out.
//!
//! Events are processed strictly one at a time in arrival order; an action
//! runs to completion before the next event is read. Action failures are
//! logged and never stop the loop. The loop ends when the source is
//! exhausted, when it fails, or when shutdown is requested.

use crate::action::Action;
use crate::event::ObservedKey;
use crate::keynames::{get_event_type_name, get_key_name, get_value_name};
use crate::mapping::KeyEventMapping;
use crate::session::PlayerControl;
use crossbeam_channel::{bounded, Receiver, Sender};
use input_linux_sys::input_event;
use serde::Serialize;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, trace, warn};

/// A sequential, blocking stream of raw input events.
pub trait EventSource {
    /// Blocks until the next event is available. `Ok(None)` marks the end of
    /// the stream.
    fn next_event(&mut self) -> io::Result<Option<input_event>>;
}

/// Any iterator of events is a source; handy for replaying captured input.
impl<I> EventSource for I
where
    I: Iterator<Item = io::Result<input_event>>,
{
    fn next_event(&mut self) -> io::Result<Option<input_event>> {
        self.next().transpose()
    }
}

/// Cancellation token shared between the signal handler and the dispatcher.
///
/// Requesting shutdown sets a flag checked before every read and wakes a
/// source that is blocked waiting for input.
#[derive(Debug, Clone)]
pub struct Shutdown {
    requested: Arc<AtomicBool>,
    wake_tx: Sender<()>,
    wake_rx: Receiver<()>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (wake_tx, wake_rx) = bounded(1);
        Shutdown {
            requested: Arc::new(AtomicBool::new(false)),
            wake_tx,
            wake_rx,
        }
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
        // A full channel already holds a pending wake-up.
        let _ = self.wake_tx.try_send(());
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Receiver that becomes ready once shutdown is requested.
    pub fn wake_receiver(&self) -> Receiver<()> {
        self.wake_rx.clone()
    }
}

/// Why the dispatch loop ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The event source closed.
    SourceExhausted,
    /// Shutdown was requested through the token.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read input event: {0}")]
    Source(#[from] io::Error),
}

/// What happened to a single raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not a key transition.
    Ignored,
    /// Key transition for a scancode without binding.
    Unmapped,
    /// Bound key, but the observed state does not satisfy the trigger.
    NotTriggered,
    Fired(Action),
    /// The action ran and reported an error.
    Failed(Action),
}

/// Counters accumulated over a dispatch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub events_read: u64,
    pub key_events: u64,
    pub unmapped: u64,
    pub not_triggered: u64,
    pub actions_fired: u64,
    pub actions_failed: u64,
}

impl DispatchStats {
    fn record(&mut self, outcome: Outcome) {
        self.events_read += 1;
        if outcome != Outcome::Ignored {
            self.key_events += 1;
        }
        match outcome {
            Outcome::Ignored => {}
            Outcome::Unmapped => self.unmapped += 1,
            Outcome::NotTriggered => self.not_triggered += 1,
            Outcome::Fired(_) => self.actions_fired += 1,
            Outcome::Failed(_) => self.actions_failed += 1,
        }
    }
}

/// Matches raw events against the key mapping and runs bound actions.
pub struct Dispatcher<'a, P: PlayerControl + ?Sized> {
    mapping: &'a KeyEventMapping,
    player: &'a mut P,
    stats: DispatchStats,
}

impl<'a, P: PlayerControl + ?Sized> Dispatcher<'a, P> {
    pub fn new(mapping: &'a KeyEventMapping, player: &'a mut P) -> Self {
        Dispatcher {
            mapping,
            player,
            stats: DispatchStats::default(),
        }
    }

    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }

    /// Processes one raw event.
    pub fn handle_event(&mut self, event: &input_event) -> Outcome {
        let outcome = self.evaluate(event);
        self.stats.record(outcome);
        outcome
    }

    fn evaluate(&mut self, event: &input_event) -> Outcome {
        let Some(key) = ObservedKey::from_event(event) else {
            trace!(
                type_name = get_event_type_name(event.type_),
                code = event.code,
                value = event.value,
                "Ignoring non-key event"
            );
            return Outcome::Ignored;
        };

        let Some(binding) = self.mapping.lookup(key.scancode).copied() else {
            trace!(
                key = get_key_name(key.scancode),
                scancode = key.scancode,
                value = get_value_name(event.value),
                "Unmapped key"
            );
            return Outcome::Unmapped;
        };

        if !binding.is_triggered_by(key.state) {
            trace!(
                key = get_key_name(key.scancode),
                observed = %key.state,
                trigger = %binding.condition,
                "Key state does not match trigger"
            );
            return Outcome::NotTriggered;
        }

        info!(
            key = get_key_name(key.scancode),
            scancode = key.scancode,
            observed = %key.state,
            action = %binding.action,
            "Key event triggers action"
        );
        match binding.action.invoke(&mut *self.player) {
            Ok(()) => Outcome::Fired(binding.action),
            Err(e) => {
                warn!(action = %binding.action, error = %e, "Action failed");
                Outcome::Failed(binding.action)
            }
        }
    }

    /// Runs until the source ends, fails, or shutdown is requested.
    pub fn run<S: EventSource + ?Sized>(
        &mut self,
        source: &mut S,
        shutdown: &Shutdown,
    ) -> Result<StopReason, DispatchError> {
        loop {
            if shutdown.is_requested() {
                info!("Shutdown requested, leaving dispatch loop");
                return Ok(StopReason::Shutdown);
            }
            match source.next_event() {
                Ok(Some(event)) => {
                    self.handle_event(&event);
                }
                Ok(None) if shutdown.is_requested() => {
                    info!("Shutdown requested, leaving dispatch loop");
                    return Ok(StopReason::Shutdown);
                }
                Ok(None) => {
                    info!("Input event source closed");
                    return Ok(StopReason::SourceExhausted);
                }
                Err(e) => {
                    error!(error = %e, "Reading input event failed");
                    return Err(DispatchError::Source(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::MappingBuilder;
    use crate::session::SessionError;
    use input_linux_sys::{timeval, EV_KEY, EV_SYN};

    const KEY_A: u16 = 30;

    fn key_ev(code: u16, value: i32) -> input_event {
        input_event {
            time: timeval { tv_sec: 0, tv_usec: 0 },
            type_: EV_KEY as u16,
            code,
            value,
        }
    }

    #[derive(Default)]
    struct Counter {
        nexts: u32,
        fail: bool,
    }

    macro_rules! unused {
        ($($name:ident),*) => {
            $(fn $name(&mut self) -> Result<(), SessionError> { unreachable!() })*
        };
    }

    impl PlayerControl for Counter {
        fn next_track(&mut self) -> Result<(), SessionError> {
            self.nexts += 1;
            if self.fail {
                Err(SessionError::Protocol("boom".to_string()))
            } else {
                Ok(())
            }
        }
        unused!(play, pause, play_pause, stop, prev_track, volume_up, volume_down,
            toggle_mute, seek_forward, seek_backward, toggle_random, toggle_repeat);
    }

    fn mapping(condition: &str) -> KeyEventMapping {
        let mut builder = MappingBuilder::new();
        builder.register(KEY_A, "next_track", Some(condition)).unwrap();
        builder.build()
    }

    #[test]
    fn outcomes_per_event() {
        let mapping = mapping("down");
        let mut player = Counter::default();
        let mut dispatcher = Dispatcher::new(&mapping, &mut player);

        let syn = input_event {
            type_: EV_SYN as u16,
            ..key_ev(0, 0)
        };
        assert_eq!(dispatcher.handle_event(&syn), Outcome::Ignored);
        assert_eq!(dispatcher.handle_event(&key_ev(48, 1)), Outcome::Unmapped);
        assert_eq!(dispatcher.handle_event(&key_ev(KEY_A, 0)), Outcome::NotTriggered);
        assert_eq!(
            dispatcher.handle_event(&key_ev(KEY_A, 1)),
            Outcome::Fired(Action::NextTrack)
        );
        assert_eq!(dispatcher.handle_event(&key_ev(KEY_A, 7)), Outcome::Ignored);

        assert_eq!(
            *dispatcher.stats(),
            DispatchStats {
                events_read: 5,
                key_events: 3,
                unmapped: 1,
                not_triggered: 1,
                actions_fired: 1,
                actions_failed: 0,
            }
        );
        drop(dispatcher);
        assert_eq!(player.nexts, 1);
    }

    #[test]
    fn failures_are_reported_not_fatal() {
        let mapping = mapping("dn_hold");
        let mut player = Counter {
            fail: true,
            ..Counter::default()
        };
        let mut dispatcher = Dispatcher::new(&mapping, &mut player);
        let mut source = vec![Ok::<_, io::Error>(key_ev(KEY_A, 1)), Ok(key_ev(KEY_A, 2))].into_iter();

        let reason = dispatcher.run(&mut source, &Shutdown::new()).unwrap();
        assert_eq!(reason, StopReason::SourceExhausted);
        assert_eq!(dispatcher.stats().actions_failed, 2);
        drop(dispatcher);
        assert_eq!(player.nexts, 2);
    }

    #[test]
    fn source_error_ends_run() {
        let mapping = mapping("up");
        let mut player = Counter::default();
        let mut dispatcher = Dispatcher::new(&mapping, &mut player);
        let mut source = vec![
            Ok(key_ev(KEY_A, 0)),
            Err(io::Error::new(io::ErrorKind::Other, "device unplugged")),
            Ok(key_ev(KEY_A, 0)),
        ]
        .into_iter();

        let err = dispatcher.run(&mut source, &Shutdown::new()).unwrap_err();
        assert!(matches!(err, DispatchError::Source(_)));
        assert_eq!(dispatcher.stats().actions_fired, 1);
    }

    #[test]
    fn requested_shutdown_stops_before_reading() {
        let mapping = mapping("up");
        let mut player = Counter::default();
        let mut dispatcher = Dispatcher::new(&mapping, &mut player);
        let shutdown = Shutdown::new();
        shutdown.request();
        shutdown.request();

        let mut source = vec![Ok::<_, io::Error>(key_ev(KEY_A, 0))].into_iter();
        assert_eq!(
            dispatcher.run(&mut source, &shutdown).unwrap(),
            StopReason::Shutdown
        );
        assert_eq!(dispatcher.stats().events_read, 0);
        assert!(shutdown.wake_receiver().try_recv().is_ok());
    }
}
