use crate::keystate::KeyState;
use input_linux_sys::{input_event, EV_KEY};
use std::io::{self, Read};
use std::mem::size_of;

/// Reads a single `input_event` from the reader. Returns Ok(None) on EOF.
pub fn read_event(reader: &mut impl Read) -> io::Result<Option<input_event>> {
    let mut buf = [0u8; size_of::<input_event>()];
    match reader.read_exact(&mut buf) {
        Ok(()) => {
            // SAFETY: input_event is plain old data; any bit pattern is a valid value.
            let event: input_event = unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const _) };
            Ok(Some(event))
        }
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(e) => Err(e),
    }
}

/// Raw byte view of an event, as the kernel writes it.
pub fn event_bytes(event: &input_event) -> &[u8] {
    // SAFETY: the slice covers exactly the memory of `event` and lives as long as it.
    unsafe { std::slice::from_raw_parts(event as *const _ as *const u8, size_of::<input_event>()) }
}

/// Checks if the event type is EV_KEY.
#[inline]
pub fn is_key_event(event: &input_event) -> bool {
    i32::from(event.type_) == EV_KEY
}

/// A key transition reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservedKey {
    pub scancode: u16,
    pub state: KeyState,
}

impl ObservedKey {
    /// Extracts the key transition from a raw event. Non-key events and key
    /// events with a value other than release/press/repeat yield `None`.
    #[inline]
    pub fn from_event(event: &input_event) -> Option<Self> {
        if !is_key_event(event) {
            return None;
        }
        KeyState::from_event_value(event.value).map(|state| ObservedKey {
            scancode: event.code,
            state,
        })
    }
}
