//! Property-based tests for key state matching and mapping construction using proptest.

use input_linux_sys::{input_event, EV_SYN};
use raspi_ir_mpdc::dispatch::{Dispatcher, Shutdown};
use raspi_ir_mpdc::mapping::{MappingBuilder, MappingError};
use raspi_ir_mpdc::{Action, KeyState};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

use test_helpers::*;

const MAX_EVENTS: usize = 200;
const LABELS: [&str; 4] = ["up", "down", "hold", "dn_hold"];

/// Reference model of the trigger table, written out case by case.
fn expected_fire(trigger: KeyState, observed: KeyState) -> bool {
    match trigger {
        KeyState::DownOrHold => observed == KeyState::Down || observed == KeyState::Hold,
        single => single == observed,
    }
}

fn arb_observable() -> impl Strategy<Value = KeyState> {
    prop::sample::select(KeyState::OBSERVABLE.to_vec())
}

fn arb_trigger() -> impl Strategy<Value = KeyState> {
    prop::sample::select(KeyState::ALL.to_vec())
}

/// (event type, scancode, value) drawn from a small key range so bindings get hit.
fn arb_raw_events() -> impl Strategy<Value = Vec<(bool, u16, i32)>> {
    prop::collection::vec((prop::bool::weighted(0.8), 28u16..36, 0i32..4), 0..=MAX_EVENTS)
}

fn raw_event(is_key: bool, code: u16, value: i32) -> input_event {
    let ev = key_ev(0, code, value);
    if is_key {
        ev
    } else {
        input_event {
            type_: EV_SYN as u16,
            ..ev
        }
    }
}

proptest! {
    /// The bitmask rule agrees with the case-by-case model for every pair.
    #[test]
    fn prop_matches_reference_model(trigger in arb_trigger(), observed in arb_observable()) {
        prop_assert_eq!(trigger.matches(observed), expected_fire(trigger, observed));
    }

    /// Registering distinct scancodes always succeeds, whatever the conditions.
    #[test]
    fn prop_distinct_scancodes_register(
        entries in prop::collection::hash_map(any::<u16>(), 0usize..4, 0..50)
    ) {
        let mut builder = MappingBuilder::new();
        for (&scancode, &label) in &entries {
            prop_assert!(builder.register(scancode, "play", Some(LABELS[label])).is_ok());
        }
        prop_assert_eq!(builder.len(), entries.len());
    }

    /// A repeated scancode is rejected no matter which condition either registration uses.
    #[test]
    fn prop_duplicate_scancode_rejected(scancode in any::<u16>(), first in 0usize..4, second in 0usize..4) {
        let mut builder = MappingBuilder::new();
        builder.register(scancode, "stop", Some(LABELS[first])).unwrap();
        prop_assert_eq!(
            builder.register(scancode, "play", Some(LABELS[second])),
            Err(MappingError::DuplicateScancode(scancode))
        );
        prop_assert_eq!(builder.len(), 1);
    }

    /// Across arbitrary event streams, actions fire exactly for key events whose
    /// observed state satisfies the binding's trigger, in stream order.
    #[test]
    fn prop_dispatch_fires_exactly_on_matching_events(
        raw in arb_raw_events(),
        bindings in prop::collection::hash_map(28u16..36, arb_trigger(), 0..8),
    ) {
        let mut builder = MappingBuilder::new();
        for (&scancode, trigger) in &bindings {
            builder.register(scancode, "toggle_mute", Some(trigger.label())).unwrap();
        }
        let mapping = builder.build();

        let expected = raw
            .iter()
            .filter(|&&(is_key, code, value)| {
                is_key
                    && KeyState::from_event_value(value).is_some_and(|observed| {
                        bindings.get(&code).is_some_and(|&t| expected_fire(t, observed))
                    })
            })
            .count();

        let mut player = RecordingPlayer::default();
        let mut dispatcher = Dispatcher::new(&mapping, &mut player);
        let mut events = source(raw.iter().map(|&(k, c, v)| raw_event(k, c, v)).collect());
        dispatcher.run(&mut events, &Shutdown::new()).unwrap();

        prop_assert_eq!(dispatcher.stats().events_read, raw.len() as u64);
        prop_assert_eq!(dispatcher.stats().actions_fired, expected as u64);
        drop(dispatcher);
        prop_assert_eq!(player.invoked.len(), expected);
        prop_assert!(player.invoked.iter().all(|&a| a == Action::ToggleMute));
    }

    /// Unknown action names never register and never touch the table.
    #[test]
    fn prop_unknown_actions_rejected(name in "[a-z_]{1,16}") {
        let known: HashSet<&str> = Action::ALL.iter().map(|a| a.name()).collect();
        prop_assume!(!known.contains(name.as_str()));
        let mut builder = MappingBuilder::new();
        let result = builder.register(KEY_A, &name, None);
        prop_assert!(matches!(result, Err(MappingError::UnknownAction(_))));
        prop_assert!(builder.is_empty());
    }
}

#[test]
fn exhaustive_single_state_table() {
    let mut table = HashMap::new();
    for trigger in KeyState::OBSERVABLE {
        for observed in KeyState::OBSERVABLE {
            table.insert((trigger.code(), observed.code()), trigger.matches(observed));
        }
    }
    for ((t, o), fired) in table {
        assert_eq!(fired, t == o, "trigger {t} observed {o}");
    }
}
