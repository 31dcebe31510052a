//! Structured logging bootstrap.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Log level configurable via `RUST_LOG`; each binary supplies its own
//!   fallback filter

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize the tracing subscriber. Call once, at process start.
pub fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
