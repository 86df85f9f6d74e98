// src/logging.rs
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Default filter for the given verbosity; `RUST_LOG` takes precedence when set.
pub fn default_directive(verbosity: Verbosity) -> &'static str {
    if verbosity.quiet {
        return "error";
    }
    match verbosity.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
