use std::env;

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the plain `LOG_LEVEL` variable; both fall back to
/// `info`.
pub fn init_logging() {
    let filter = env::var("RUST_LOG")
        .or_else(|_| env::var("LOG_LEVEL").map(|level| level.to_lowercase()))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
