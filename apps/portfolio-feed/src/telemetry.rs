//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`, filtered by `RUST_LOG`.
//! Without `RUST_LOG`, crate events are logged at `info`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVE: &str = "portfolio_feed=info";

/// Initialize the global tracing subscriber.
///
/// Call once at process start.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();
}

/// Build the filter from the raw `RUST_LOG` value, falling back to the default.
fn env_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
