//! Diagnostics for metasweep runs.
//!
//! Events go to stderr; stdout carries only the `Deleted:` lines and the
//! summary written by `output`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, filtered by `RUST_LOG` (`warn` when unset).
/// `RUST_LOG=metasweep=debug` shows one event per removed file.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .init();
}
