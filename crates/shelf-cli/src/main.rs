//! shelf - recommendation scoring engine CLI

use std::process::ExitCode;

use clap::Parser;

use shelf_cli::{commands, tracing_setup, AppContext, Cli};
use shelf_core::errors::ShelfError;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                // JSON error object on stdout so callers parse one stream.
                let error_json = serde_json::json!({
                    "error": true,
                    "code": error_code(&e),
                    "message": format!("{e:#}"),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    tracing_setup::init_tracing(cli.verbose, cli.quiet, cli.json, &ctx.config.observability);
    let stdout = std::io::stdout();
    commands::run(&ctx, &cli.command, &mut stdout.lock())
}

fn error_code(e: &anyhow::Error) -> &'static str {
    match e.downcast_ref::<ShelfError>() {
        Some(ShelfError::UnknownUser { .. }) => "unknown_user",
        Some(ShelfError::InvalidAlgorithm { .. }) => "invalid_algorithm",
        Some(ShelfError::InvalidTopK { .. }) => "invalid_top_k",
        Some(err) if err.is_dependency_unavailable() => "dependency_unavailable",
        Some(ShelfError::ConfigError(_)) => "config_error",
        Some(ShelfError::DataError(_)) => "data_error",
        _ => "error",
    }
}
