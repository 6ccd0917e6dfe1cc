//! Logging setup for the blade binary

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `info`.
/// Stdout stays reserved for helper output.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true)
                .with_filter(filter),
        )
        .init();
}
