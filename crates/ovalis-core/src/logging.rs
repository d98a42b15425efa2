//! Logging setup built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "debug,ovalis_render=trace,glow=info";

/// Install the global fmt subscriber.
///
/// Honors `RUST_LOG` when present, otherwise falls back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Install the global fmt subscriber with an explicit filter directive.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .try_init()
        .is_ok()
}
