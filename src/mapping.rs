//! Scancode to (trigger condition, action) table.
//!
//! The table is assembled by a [`MappingBuilder`] during configuration and
//! frozen into a [`KeyEventMapping`] that only supports lookups, so nothing
//! can mutate it once dispatch has started.

use crate::action::{Action, UnknownAction};
use crate::keystate::{InvalidKeyState, KeyState};
use std::collections::HashMap;
use thiserror::Error;

/// One configured key binding. Immutable once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub scancode: u16,
    pub condition: KeyState,
    pub action: Action,
}

impl KeyBinding {
    /// Returns true if the observed state fires this binding.
    #[inline]
    pub fn is_triggered_by(&self, observed: KeyState) -> bool {
        self.condition.matches(observed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("scancode {0} is already bound")]
    DuplicateScancode(u16),
    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),
    #[error(transparent)]
    InvalidKeyState(#[from] InvalidKeyState),
}

/// Collects bindings; every rejected registration leaves the builder unchanged.
#[derive(Debug, Default)]
pub struct MappingBuilder {
    bindings: HashMap<u16, KeyBinding>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `scancode` for `action_name`, triggered by `condition`
    /// (`up` when absent).
    pub fn register(
        &mut self,
        scancode: u16,
        action_name: &str,
        condition: Option<&str>,
    ) -> Result<KeyBinding, MappingError> {
        if self.bindings.contains_key(&scancode) {
            return Err(MappingError::DuplicateScancode(scancode));
        }
        let action = Action::parse(action_name)?;
        let condition = match condition {
            Some(label) => label.parse::<KeyState>()?,
            None => KeyState::default(),
        };

        let binding = KeyBinding {
            scancode,
            condition,
            action,
        };
        self.bindings.insert(scancode, binding);
        Ok(binding)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Freezes the collected bindings.
    pub fn build(self) -> KeyEventMapping {
        KeyEventMapping {
            bindings: self.bindings,
        }
    }
}

/// Read-only binding table used by the dispatcher.
#[derive(Debug, Clone, Default)]
pub struct KeyEventMapping {
    bindings: HashMap<u16, KeyBinding>,
}

impl KeyEventMapping {
    #[inline]
    pub fn lookup(&self, scancode: u16) -> Option<&KeyBinding> {
        self.bindings.get(&scancode)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings ordered by scancode.
    pub fn bindings(&self) -> Vec<&KeyBinding> {
        let mut bindings: Vec<_> = self.bindings.values().collect();
        bindings.sort_by_key(|b| b.scancode);
        bindings
    }
}
