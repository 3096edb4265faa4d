//! Tracing subscriber bootstrap for hosts embedding the board.

use tracing_subscriber::EnvFilter;

/// Initialises the global tracing subscriber with compact stderr output.
///
/// `RUST_LOG` takes precedence over `level` when set. Calling this more than
/// once keeps the first subscriber.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    if subscriber.try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
