//! Tracing/logging initialization shared by both service binaries.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install the process-wide subscriber: JSON lines to stdout, filtered via
/// `RUST_LOG` (falling back to `info`). Calling it again is a no-op, so the
/// binaries and tests can all call it unconditionally.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
