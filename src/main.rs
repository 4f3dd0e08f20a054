// Service entry point.
// Loads the configuration, opens the input device, connects to MPD and runs
// the dispatch loop until the device closes or a termination signal arrives.

use raspi_ir_mpdc::config::{Config, InputDevice};
use raspi_ir_mpdc::device::DeviceSource;
use raspi_ir_mpdc::dispatch::{DispatchStats, Dispatcher, Shutdown};
use raspi_ir_mpdc::session::MpdSession;
use raspi_ir_mpdc::{cli, telemetry, util};
use signal_hook::consts::signal::*;
use signal_hook::iterator::Signals;
use std::io;
use std::process::ExitCode;
use std::thread;
use tracing::{error, info, warn};

const EXIT_SOURCE_FAILED: u8 = 1;
const EXIT_IR_INIT_FAILED: u8 = 3;
const EXIT_MPD_CONNECT_FAILED: u8 = 5;

/// Requests shutdown on SIGTERM/SIGINT/SIGQUIT. A second signal exits at once.
fn install_signal_handler(shutdown: &Shutdown) -> io::Result<()> {
    let mut signals = Signals::new([SIGTERM, SIGINT, SIGQUIT])?;
    let shutdown = shutdown.clone();
    thread::Builder::new()
        .name("signals".to_string())
        .spawn(move || {
            for sig in signals.forever() {
                if shutdown.is_requested() {
                    warn!(signal = sig, "Second signal received, exiting immediately");
                    std::process::exit(128 + sig);
                }
                info!(signal = sig, "Received signal, shutting down");
                shutdown.request();
            }
        })?;
    Ok(())
}

fn report_stats(stats: &DispatchStats, json: bool) {
    info!(
        events = stats.events_read,
        key_events = stats.key_events,
        unmapped = stats.unmapped,
        not_triggered = stats.not_triggered,
        fired = stats.actions_fired,
        failed = stats.actions_failed,
        "Dispatch statistics"
    );
    if json {
        match serde_json::to_string_pretty(stats) {
            Ok(text) => eprintln!("{text}"),
            Err(e) => error!(error = %e, "Failed to serialize statistics"),
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse_args();
    telemetry::init_tracing(&args);

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %args.config.display(), error = %e, "Invalid configuration");
            return ExitCode::from(e.exit_code());
        }
    };

    let device = args
        .device
        .as_deref()
        .map(InputDevice::from_arg)
        .unwrap_or_else(|| config.ir.device.clone());
    info!(
        %device,
        bindings = config.ir.mapping.len(),
        mpd_host = %config.mpd.host,
        mpd_port = config.mpd.port,
        mpd_timeout = %util::format_duration(config.mpd.timeout),
        "Configuration loaded"
    );

    if args.check {
        info!("Configuration OK");
        return ExitCode::SUCCESS;
    }

    let shutdown = Shutdown::new();
    if let Err(e) = install_signal_handler(&shutdown) {
        error!(error = %e, "Failed to install signal handler");
        return ExitCode::from(EXIT_SOURCE_FAILED);
    }

    let mut source = match DeviceSource::open(&device, &shutdown) {
        Ok(source) => source,
        Err(e) => {
            error!(%device, error = %e, "Init IR failed: cannot open input device");
            return ExitCode::from(EXIT_IR_INIT_FAILED);
        }
    };

    let mut session = match MpdSession::connect(&config.mpd) {
        Ok(session) => session,
        Err(e) => {
            error!(host = %config.mpd.host, port = config.mpd.port, error = %e,
                "Could not connect to MPD server");
            return ExitCode::from(EXIT_MPD_CONNECT_FAILED);
        }
    };

    info!("Enter raspi-ir-mpdc service loop...");
    let mut dispatcher = Dispatcher::new(&config.ir.mapping, &mut session);
    let result = dispatcher.run(&mut source, &shutdown);
    let stats = *dispatcher.stats();

    session.close();
    report_stats(&stats, args.stats_json);

    match result {
        Ok(reason) => {
            info!(?reason, "Service loop finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Service loop aborted");
            ExitCode::from(EXIT_SOURCE_FAILED)
        }
    }
}
