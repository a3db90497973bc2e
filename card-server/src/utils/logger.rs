//! Logging Infrastructure

/// Initialize the tracing subscriber
///
/// Honors `RUST_LOG`; defaults to `card_server=info` when unset.
pub fn init_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "card_server=info".into()),
        )
        .with_target(false)
        .init();
}
