//! Diagnostic logging setup.

use tracing::Level;

/// Installs a stderr `fmt` subscriber capped at `WARN`.
///
/// The filter is fixed; no environment variable is consulted. Does nothing
/// if a global subscriber is already set.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
