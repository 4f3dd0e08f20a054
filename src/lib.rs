// Module declarations for the library crate.

pub mod action;
pub mod cli;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod event;
pub mod keynames;
pub mod keystate;
pub mod mapping;
pub mod session;
pub mod telemetry;
pub mod util;

pub use action::Action;
pub use dispatch::{Dispatcher, EventSource, Shutdown, StopReason};
pub use keystate::KeyState;
pub use mapping::{KeyEventMapping, MappingBuilder};
pub use session::{MpdSession, PlayerControl};
