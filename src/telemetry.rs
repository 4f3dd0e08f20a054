//! Tracing initialization.

use crate::cli::Args;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber (fmt layer on stderr).
///
/// Filter precedence: `--log-filter`, then `RUST_LOG`, then the default
/// (`raspi_ir_mpdc=info`, or `debug` with `--verbose`).
pub fn init_tracing(args: &Args) {
    let default_filter = if args.verbose {
        "raspi_ir_mpdc=debug"
    } else {
        "raspi_ir_mpdc=info"
    };

    let requested = args
        .log_filter
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok());
    let filter = match requested {
        Some(directives) => EnvFilter::try_new(&directives).unwrap_or_else(|e| {
            eprintln!("Warning: Invalid log filter '{directives}': {e}");
            EnvFilter::new(default_filter)
        }),
        None => EnvFilter::new(default_filter),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(args.verbose)
        .with_level(true);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        // option_env! keeps builds outside a git checkout working
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_ts = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown"),
        "raspi-ir-mpdc starting"
    );
}
