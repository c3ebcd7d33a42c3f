//! Installs a `tracing_subscriber` which prints the sampler's spans and the
//! `log` records bridged into them, filtered by the environment.
//!
//! ```bash
//! RUST_LOG=gcproject=debug
//! ```

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber for sampling spans and bridged `log` records.
/// Spans are only printed once this has run; call it once, at start-up.
pub fn initialize_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(fmt_layer)
        .init();
}
