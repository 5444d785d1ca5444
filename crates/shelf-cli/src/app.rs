//! Per-invocation context shared by every command.

use std::path::Path;

use anyhow::{Context, Result};
use shelf_core::config::ShelfConfig;
use shelf_core::models::Snapshot;

use crate::cli::Cli;

pub struct AppContext {
    pub config: ShelfConfig,
    pub json: bool,
}

impl AppContext {
    pub fn new(config: ShelfConfig, json: bool) -> Self {
        Self { config, json }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ShelfConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => ShelfConfig::default(),
        };
        Ok(Self::new(config, cli.json))
    }

    /// Read the snapshot a command runs against.
    pub fn load_snapshot(&self, path: &Path) -> Result<Snapshot> {
        Snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()))
    }
}
