use std::io;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable that overrides the verbosity-derived filter.
pub(crate) const LOG_ENV: &str = "VCFILTER_LOG";

/// Returns the default filter directive for a `-v` count.
pub(crate) const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr subscriber for the process.
///
/// `VCFILTER_LOG` takes precedence over the `-v` count. A subscriber that is
/// already installed is kept.
pub(crate) fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(true),
        )
        .with(filter)
        .try_init();
}
