//! Tracing initialization for the `shelf` binary.

use std::sync::Once;

use shelf_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

const CRATES: [&str; 4] = ["shelf_core", "shelf_embeddings", "shelf_scoring", "shelf_cli"];

/// Default filter: `warn` globally, `level` for the shelf crates.
pub fn default_directives(level: &str) -> String {
    std::iter::once("warn".to_string())
        .chain(CRATES.iter().map(|c| format!("{c}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Level for the shelf crates: `-v` flags override the configured level.
pub fn level_for(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize logging to stderr.
///
/// `SHELF_LOG` takes precedence over the flags and config, e.g.
/// `SHELF_LOG=shelf_scoring=debug`. Idempotent.
pub fn init_tracing(verbose: u8, quiet: bool, json: bool, config: &ObservabilityConfig) {
    if quiet {
        return;
    }
    INIT.call_once(|| {
        let directives = default_directives(level_for(verbose, &config.log_level));
        let filter = EnvFilter::try_from_env("SHELF_LOG")
            .unwrap_or_else(|_| EnvFilter::new(directives));

        if json || config.json_logs {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
    });
}
