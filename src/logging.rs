//! Diagnostic logging setup shared by the herald binaries.
//!
//! User-facing output goes to stdout; tracing is reserved for
//! diagnostics and stays on stderr. The filter defaults to `warn` so
//! hook paths are silent unless `RUST_LOG` asks for more.

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber.
///
/// Errors (e.g. a subscriber already installed by a test harness) are
/// ignored; logging is never worth failing a command over.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
