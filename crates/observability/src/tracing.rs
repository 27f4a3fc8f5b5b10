//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call multiple times;
/// only the first call installs a subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Compact human-readable output; this is a single-process tool, not a
    // log-shipping service.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
