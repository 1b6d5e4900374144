//! tracing subscriber setup for the binary. Logs go to stderr so stdout
//! stays reserved for tables and messages.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Calling it twice is harmless.
pub fn enable_logging(level: &str) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        format!("{}={level}", env!("CARGO_PKG_NAME").replace('-', "_"))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
