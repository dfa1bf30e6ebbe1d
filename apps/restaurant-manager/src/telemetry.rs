//! Tracing Setup
//!
//! Console logging through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise from `observability.logging.level`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Build the filter from `RUST_LOG` and the configured level.
#[must_use]
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), logging)
}

/// The override wins when set and parsable, then the configured level,
/// then `info`.
#[allow(clippy::expect_used)]
fn filter_from(rust_log: Option<&str>, logging: &LoggingConfig) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .map_or_else(
            || EnvFilter::try_new(&logging.level),
            EnvFilter::try_new,
        )
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(
            "hyper=warn"
                .parse()
                .expect("static directive 'hyper=warn' is valid"),
        )
}

/// Initialize the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber was already installed.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = env_filter(logging);

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}
