//! Argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use shelf_core::constants::VERSION;

use crate::commands::interactions::InteractionsArgs;
use crate::commands::recommend::RecommendArgs;

#[derive(Parser, Debug)]
#[command(name = "shelf", version = VERSION, about = "Score and rank product recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable JSON output and logs
    #[arg(long, global = true)]
    pub json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "SHELF_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank recommendations for one user
    Recommend(RecommendArgs),
    /// List items the user already purchased or browsed
    Interactions(InteractionsArgs),
}
