//! Closed set of playback actions that a key can be bound to.

use crate::session::{PlayerControl, SessionError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named, zero-argument playback operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Play,
    Pause,
    PlayPause,
    Stop,
    NextTrack,
    PrevTrack,
    VolumeUp,
    VolumeDown,
    ToggleMute,
    SeekForward,
    SeekBackward,
    ToggleRandom,
    ToggleRepeat,
}

/// An action name that does not resolve to any [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl Action {
    pub const ALL: [Action; 13] = [
        Action::Play,
        Action::Pause,
        Action::PlayPause,
        Action::Stop,
        Action::NextTrack,
        Action::PrevTrack,
        Action::VolumeUp,
        Action::VolumeDown,
        Action::ToggleMute,
        Action::SeekForward,
        Action::SeekBackward,
        Action::ToggleRandom,
        Action::ToggleRepeat,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Action::Play => "play",
            Action::Pause => "pause",
            Action::PlayPause => "play_pause",
            Action::Stop => "stop",
            Action::NextTrack => "next_track",
            Action::PrevTrack => "prev_track",
            Action::VolumeUp => "volume_up",
            Action::VolumeDown => "volume_down",
            Action::ToggleMute => "toggle_mute",
            Action::SeekForward => "seek_forward",
            Action::SeekBackward => "seek_backward",
            Action::ToggleRandom => "toggle_random",
            Action::ToggleRepeat => "toggle_repeat",
        }
    }

    /// Resolves an action by its configuration name (case-insensitive).
    pub fn parse(name: &str) -> Result<Action, UnknownAction> {
        let normalized = name.trim().to_ascii_lowercase();
        Action::ALL
            .into_iter()
            .find(|action| action.name() == normalized)
            .ok_or_else(|| UnknownAction(name.to_string()))
    }

    /// Performs the action against the playback session.
    pub fn invoke<P: PlayerControl + ?Sized>(self, player: &mut P) -> Result<(), SessionError> {
        match self {
            Action::Play => player.play(),
            Action::Pause => player.pause(),
            Action::PlayPause => player.play_pause(),
            Action::Stop => player.stop(),
            Action::NextTrack => player.next_track(),
            Action::PrevTrack => player.prev_track(),
            Action::VolumeUp => player.volume_up(),
            Action::VolumeDown => player.volume_down(),
            Action::ToggleMute => player.toggle_mute(),
            Action::SeekForward => player.seek_forward(),
            Action::SeekBackward => player.seek_backward(),
            Action::ToggleRandom => player.toggle_random(),
            Action::ToggleRepeat => player.toggle_repeat(),
        }
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
