//! Gatework Tools
//!
//! CLI tools for working with gatework circuits.

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
/// Default is `info` with debug detail for the gatework crates.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,gatework_tools=debug,gatework_runtime=debug,gatework_dsl=info")
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
