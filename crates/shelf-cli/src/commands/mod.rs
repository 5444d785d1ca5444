//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

pub mod interactions;
pub mod recommend;

use std::io::Write;

use anyhow::Result;

use crate::app::AppContext;
use crate::cli::Commands;

pub fn run(ctx: &AppContext, command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Recommend(args) => recommend::run(ctx, args, out),
        Commands::Interactions(args) => interactions::run(ctx, args, out),
    }
}
