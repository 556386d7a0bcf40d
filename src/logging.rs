//! Tracing subscriber setup for hosts embedding keyhole.
//!
//! The filter is read from `KEYHOLE_LOG` (env-filter syntax). Without it,
//! keyhole logs at `warn`, or `debug` when verbose.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::core::constants::LOG_ENV;

/// Build the log filter from `KEYHOLE_LOG`.
pub fn filter(verbose: bool) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV).ok().as_deref(), verbose)
}

/// Build the log filter from explicit directives.
///
/// Missing or unparsable directives fall back to the verbosity default.
pub fn filter_from(directives: Option<&str>, verbose: bool) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| {
            if verbose {
                EnvFilter::new("keyhole=debug")
            } else {
                EnvFilter::new("keyhole=warn")
            }
        })
}

/// Install a human-readable subscriber.
///
/// Does nothing if a global subscriber is already set.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt::layer().with_target(false).without_time())
        .try_init();
}

/// Install a JSON subscriber, one object per line.
///
/// Does nothing if a global subscriber is already set.
pub fn init_json(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt::layer().json())
        .try_init();
}
