//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` when set and valid, else `default_filter`,
/// else plain `info`.
#[must_use]
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber. Call once, at startup.
pub fn init(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .init();
}
