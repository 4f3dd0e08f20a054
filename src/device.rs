//! Input device access.
//!
//! Reads happen on a dedicated thread so the dispatcher can wait on both the
//! device and the shutdown token at once.

use crate::config::InputDevice;
use crate::dispatch::{EventSource, Shutdown};
use crate::event::read_event;
use crossbeam_channel::{bounded, select, Receiver, Sender};
use input_linux_sys::input_event;
use std::fs::File;
use std::io::{self, Read};
use std::thread;
use tracing::{debug, info};

/// Events buffered between the reader thread and the dispatcher.
const CHANNEL_CAPACITY: usize = 64;

/// Event source backed by a reader thread.
pub struct DeviceSource {
    events: Receiver<io::Result<input_event>>,
    wake: Receiver<()>,
    // Keeps the wake channel connected when the caller drops its token.
    _shutdown: Shutdown,
}

impl DeviceSource {
    /// Opens the device (or stdin) and starts reading from it.
    pub fn open(device: &InputDevice, shutdown: &Shutdown) -> io::Result<Self> {
        match device {
            InputDevice::Path(path) => {
                let file = File::open(path)?;
                info!(device = %path.display(), "Opened input device");
                Self::spawn(file, shutdown)
            }
            InputDevice::Stdin => {
                info!("Reading input events from stdin");
                Self::spawn(io::stdin(), shutdown)
            }
        }
    }

    /// Starts a reader thread over any byte stream of raw events.
    pub fn spawn<R: Read + Send + 'static>(reader: R, shutdown: &Shutdown) -> io::Result<Self> {
        let (tx, rx) = bounded(CHANNEL_CAPACITY);
        thread::Builder::new()
            .name("event-reader".to_string())
            .spawn(move || reader_loop(reader, tx))?;
        Ok(DeviceSource {
            events: rx,
            wake: shutdown.wake_receiver(),
            _shutdown: shutdown.clone(),
        })
    }
}

fn reader_loop<R: Read>(mut reader: R, tx: Sender<io::Result<input_event>>) {
    loop {
        match read_event(&mut reader) {
            Ok(Some(event)) => {
                if tx.send(Ok(event)).is_err() {
                    debug!("Dispatcher gone, stopping event reader");
                    break;
                }
            }
            Ok(None) => {
                debug!("Input device reached end of stream");
                break;
            }
            Err(e) => {
                let _ = tx.send(Err(e));
                break;
            }
        }
    }
}

impl EventSource for DeviceSource {
    fn next_event(&mut self) -> io::Result<Option<input_event>> {
        select! {
            recv(self.events) -> msg => match msg {
                Ok(Ok(event)) => Ok(Some(event)),
                Ok(Err(e)) => Err(e),
                // Reader thread finished: end of stream.
                Err(_) => Ok(None),
            },
            recv(self.wake) -> _ => Ok(None),
        }
    }
}
