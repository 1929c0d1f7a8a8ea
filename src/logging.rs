//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence when set, so individual targets (for example
//! `serenity=warn`) can be tuned without touching the bot configuration.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Arguments
/// - `level` - Fallback level used when `RUST_LOG` is not set or invalid
pub fn init_tracing(level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
