//! Logging initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Respects `RUST_LOG`; defaults to `info` for the service crates and warn
/// elsewhere. Must be called once, before any request is served.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,traceup_api=info,traceup_storage=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
