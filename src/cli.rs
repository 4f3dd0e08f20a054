use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// MPD/Mopidy client service controlled by IR remote key events.
/// Reads key events from an input device and triggers playback actions
/// as configured in the [IR] section of the configuration file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (TOML with [IR] and optional [MPD] sections).
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH, value_name = "PATH")]
    pub config: PathBuf,

    /// Read events from this device instead of the configured INPUTDEVICE.
    /// Use "-" to read raw input_event structs from stdin.
    #[arg(short, long, value_name = "PATH")]
    pub device: Option<String>,

    /// Validate the configuration and exit without opening the device or connecting to MPD.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub check: bool,

    /// Print final dispatch statistics as JSON to stderr on exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub stats_json: bool,

    /// Enable debug logging (overridden by --log-filter or RUST_LOG).
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,

    /// Log filter directive, e.g. "raspi_ir_mpdc=trace". Takes precedence over RUST_LOG.
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Parses command line arguments using clap.
pub fn parse_args() -> Args {
    Args::parse()
}
