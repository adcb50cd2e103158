//! Structured logging setup.
//!
//! Filters come from the `CORRESPONDENCE_LOG` environment variable, e.g.
//! `CORRESPONDENCE_LOG=debug` or `CORRESPONDENCE_LOG=correspondence_graph::loader=debug`.
//! Logs go to stderr; stdout is reserved for query output.

use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "CORRESPONDENCE_LOG";

/// Install the global subscriber with a `warn` default level.
pub fn init() {
    init_with_default("warn");
}

/// Install the global subscriber, using `default_level` when `CORRESPONDENCE_LOG` is unset.
///
/// Later calls are ignored; only one global subscriber can be set.
pub fn init_with_default(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
}
