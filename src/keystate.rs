//! Key state vocabulary shared by configuration and dispatch.
//!
//! Every state carries a small integer code. Observed device states are only
//! ever `Up`, `Down` or `Hold` (the raw EV_KEY values 0, 1 and 2); `DownOrHold`
//! exists purely as a configured trigger and is the bitwise union of the two
//! codes it stands for.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Trigger condition or observed transition of a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyState {
    /// Key released.
    #[default]
    Up = 0,
    /// Key pressed.
    Down = 1,
    /// Key held (auto-repeat).
    Hold = 2,
    /// Trigger on either `Down` or `Hold`. Never observed from a device.
    DownOrHold = 3,
}

/// A key state label outside `up`, `down`, `hold`, `dn_hold`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key state '{0}' (expected one of: up, down, hold, dn_hold)")]
pub struct InvalidKeyState(pub String);

impl KeyState {
    /// All states, ordered by code.
    pub const ALL: [KeyState; 4] = [
        KeyState::Up,
        KeyState::Down,
        KeyState::Hold,
        KeyState::DownOrHold,
    ];

    /// States a device can actually report.
    pub const OBSERVABLE: [KeyState; 3] = [KeyState::Up, KeyState::Down, KeyState::Hold];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Configuration label of this state.
    pub const fn label(self) -> &'static str {
        match self {
            KeyState::Up => "up",
            KeyState::Down => "down",
            KeyState::Hold => "hold",
            KeyState::DownOrHold => "dn_hold",
        }
    }

    /// Maps a raw EV_KEY value (0 release, 1 press, 2 repeat) to the observed state.
    /// Any other value is not a key transition and yields `None`.
    #[inline]
    pub fn from_event_value(value: i32) -> Option<KeyState> {
        match value {
            0 => Some(KeyState::Up),
            1 => Some(KeyState::Down),
            2 => Some(KeyState::Hold),
            _ => None,
        }
    }

    /// Returns true if an observed state satisfies `self` used as a trigger.
    ///
    /// `match(o, t) = o == t || (o & t) != 0`. For single-state triggers this
    /// reduces to equality; for `DownOrHold` (0b11) it accepts `Down` (0b01)
    /// and `Hold` (0b10) but never `Up` (0b00).
    ///
    /// Extending the vocabulary needs the bitmask table re-derived: any new
    /// code sharing a bit with `Hold` or `Down` would match those too.
    #[inline]
    pub fn matches(self, observed: KeyState) -> bool {
        let (o, t) = (observed.code(), self.code());
        o == t || (o & t) != 0
    }
}

impl FromStr for KeyState {
    type Err = InvalidKeyState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        KeyState::ALL
            .into_iter()
            .find(|state| state.label() == normalized)
            .ok_or_else(|| InvalidKeyState(s.to_string()))
    }
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_label_order() {
        let labels: Vec<_> = KeyState::ALL.iter().map(|s| (s.label(), s.code())).collect();
        assert_eq!(
            labels,
            vec![("up", 0), ("down", 1), ("hold", 2), ("dn_hold", 3)]
        );
    }

    #[test]
    fn parses_all_labels_case_insensitively() {
        assert_eq!("up".parse::<KeyState>(), Ok(KeyState::Up));
        assert_eq!("DOWN".parse::<KeyState>(), Ok(KeyState::Down));
        assert_eq!(" hold ".parse::<KeyState>(), Ok(KeyState::Hold));
        assert_eq!("Dn_Hold".parse::<KeyState>(), Ok(KeyState::DownOrHold));
    }

    #[test]
    fn rejects_unknown_labels() {
        for bad in ["", "pressed", "downorhold", "dn-hold", "3"] {
            assert_eq!(
                bad.parse::<KeyState>(),
                Err(InvalidKeyState(bad.to_string())),
                "label {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn single_state_triggers_reduce_to_equality() {
        for trigger in KeyState::OBSERVABLE {
            for observed in KeyState::OBSERVABLE {
                assert_eq!(
                    trigger.matches(observed),
                    trigger == observed,
                    "trigger {trigger} vs observed {observed}"
                );
            }
        }
    }

    #[test]
    fn down_or_hold_never_matches_up() {
        assert!(!KeyState::DownOrHold.matches(KeyState::Up));
        assert!(KeyState::DownOrHold.matches(KeyState::Down));
        assert!(KeyState::DownOrHold.matches(KeyState::Hold));
    }

    #[test]
    fn raw_values_map_to_observed_states() {
        assert_eq!(KeyState::from_event_value(0), Some(KeyState::Up));
        assert_eq!(KeyState::from_event_value(1), Some(KeyState::Down));
        assert_eq!(KeyState::from_event_value(2), Some(KeyState::Hold));
        assert_eq!(KeyState::from_event_value(3), None);
        assert_eq!(KeyState::from_event_value(-1), None);
    }

    #[test]
    fn default_trigger_is_up() {
        assert_eq!(KeyState::default(), KeyState::Up);
    }
}
