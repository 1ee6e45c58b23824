//! Tracing setup for `semver-in`.
//!
//! The pipeline parses standard output as the response envelope, so log
//! lines must never land there; the subscriber writes to stderr only.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` picks the verbosity (`warn` when unset). Set
/// `RUST_LOG=semver_resource=debug` to see config lookup, the resolved
/// bucket endpoint and the applied bump.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
