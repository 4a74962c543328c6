//! Tracing setup for the embedding application shell.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize compact structured logging.
///
/// Called once by the embedding shell before any core APIs are used.
/// Respects `RUST_LOG`; defaults to debug for this crate and info elsewhere.
pub fn init_logging() {
    let format = tracing_subscriber::fmt::layer().compact().with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("homefit_core=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
