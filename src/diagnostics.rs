//! Tracing bootstrap for hosting processes
//!
//! The crate emits its own diagnostics through `tracing`; hosts that do
//! not install a subscriber of their own can use this one.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// Honors `RUST_LOG`, defaulting to `logkeep=info`. Does nothing when a
/// global subscriber is already installed.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logkeep=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
