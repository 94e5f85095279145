//! Tracing setup for the server binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber with the configured level.
///
/// `RUST_LOG` takes precedence when set, so ad-hoc debugging needs no
/// config edit. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}
