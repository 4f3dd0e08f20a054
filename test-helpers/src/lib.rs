//! Common helper functions for tests.
use input_linux_sys::{input_event, timeval, EV_KEY, EV_MSC, EV_SYN};
use raspi_ir_mpdc::session::{PlayerControl, SessionError};
use raspi_ir_mpdc::Action;
use std::io::Write;

// --- Constants ---
pub const KEY_A: u16 = 30;
pub const KEY_B: u16 = 48;
pub const KEY_VOLUMEUP: u16 = 115;
pub const KEY_PLAYPAUSE: u16 = 164;

/// Raw EV_KEY values.
pub const RELEASE: i32 = 0;
pub const PRESS: i32 = 1;
pub const REPEAT: i32 = 2;

// --- Event Creation Helpers ---

/// Creates an EV_KEY input_event with a specific microsecond timestamp.
pub fn key_ev(ts_us: u64, code: u16, value: i32) -> input_event {
    input_event {
        time: timeval {
            tv_sec: (ts_us / 1_000_000) as _,
            tv_usec: (ts_us % 1_000_000) as _,
        },
        type_: EV_KEY as u16,
        code,
        value,
    }
}

/// Creates a non-key input_event (EV_SYN/SYN_REPORT).
pub fn non_key_ev(ts_us: u64) -> input_event {
    input_event {
        time: timeval {
            tv_sec: (ts_us / 1_000_000) as _,
            tv_usec: (ts_us % 1_000_000) as _,
        },
        type_: EV_SYN as u16,
        code: 0,
        value: 0,
    }
}

/// Creates the EV_MSC/MSC_SCAN event rc-core emits ahead of each IR key event.
pub fn scan_ev(ts_us: u64, ir_scancode: i32) -> input_event {
    input_event {
        type_: EV_MSC as u16,
        code: 4,
        value: ir_scancode,
        ..non_key_ev(ts_us)
    }
}

/// A key sequence at 100 ms spacing, each key event followed by SYN_REPORT,
/// the way an IR receiver reports it.
pub fn key_sequence(code: u16, values: &[i32]) -> Vec<input_event> {
    values
        .iter()
        .enumerate()
        .flat_map(|(i, &value)| {
            let ts = i as u64 * 100_000;
            [key_ev(ts, code, value), non_key_ev(ts)]
        })
        .collect()
}

/// Serializes events into the raw byte stream the kernel produces.
pub fn events_to_bytes(events: &[input_event]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(std::mem::size_of_val(events));
    for ev in events {
        bytes
            .write_all(raspi_ir_mpdc::event::event_bytes(ev))
            .expect("Failed to write event to byte vector");
    }
    bytes
}

/// Wraps events as an infallible event source.
pub fn source(events: Vec<input_event>) -> impl Iterator<Item = std::io::Result<input_event>> {
    events.into_iter().map(Ok)
}

// --- Player Helpers ---

/// Records every action invoked on it. Actions listed in `failing` report an error.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub invoked: Vec<Action>,
    pub failing: Vec<Action>,
}

impl RecordingPlayer {
    pub fn failing_on(actions: &[Action]) -> Self {
        RecordingPlayer {
            invoked: Vec::new(),
            failing: actions.to_vec(),
        }
    }

    fn record(&mut self, action: Action) -> Result<(), SessionError> {
        self.invoked.push(action);
        if self.failing.contains(&action) {
            Err(SessionError::Ack(format!("[50@0] {{{action}}} simulated failure")))
        } else {
            Ok(())
        }
    }
}

impl PlayerControl for RecordingPlayer {
    fn play(&mut self) -> Result<(), SessionError> {
        self.record(Action::Play)
    }
    fn pause(&mut self) -> Result<(), SessionError> {
        self.record(Action::Pause)
    }
    fn play_pause(&mut self) -> Result<(), SessionError> {
        self.record(Action::PlayPause)
    }
    fn stop(&mut self) -> Result<(), SessionError> {
        self.record(Action::Stop)
    }
    fn next_track(&mut self) -> Result<(), SessionError> {
        self.record(Action::NextTrack)
    }
    fn prev_track(&mut self) -> Result<(), SessionError> {
        self.record(Action::PrevTrack)
    }
    fn volume_up(&mut self) -> Result<(), SessionError> {
        self.record(Action::VolumeUp)
    }
    fn volume_down(&mut self) -> Result<(), SessionError> {
        self.record(Action::VolumeDown)
    }
    fn toggle_mute(&mut self) -> Result<(), SessionError> {
        self.record(Action::ToggleMute)
    }
    fn seek_forward(&mut self) -> Result<(), SessionError> {
        self.record(Action::SeekForward)
    }
    fn seek_backward(&mut self) -> Result<(), SessionError> {
        self.record(Action::SeekBackward)
    }
    fn toggle_random(&mut self) -> Result<(), SessionError> {
        self.record(Action::ToggleRandom)
    }
    fn toggle_repeat(&mut self) -> Result<(), SessionError> {
        self.record(Action::ToggleRepeat)
    }
}
