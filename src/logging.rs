use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize tracing to stderr, keeping stdout for the feeding transcript.
///
/// `RUST_LOG` overrides `default_level` (e.g. `RUST_LOG=moo_mover_rs=debug`).
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
