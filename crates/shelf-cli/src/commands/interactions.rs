//! shelf interactions - List a user's purchased and browsed items

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use shelf_core::models::UserId;
use shelf_scoring::RecommendationEngine;

use crate::app::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct InteractionsArgs {
    /// Snapshot JSON (users, items, purchases, browsing, item_images)
    #[arg(long, env = "SHELF_DATA")]
    pub data: PathBuf,

    /// User to list
    #[arg(long, short)]
    pub user: UserId,
}

pub fn run(ctx: &AppContext, args: &InteractionsArgs, out: &mut impl Write) -> Result<()> {
    let snapshot = ctx.load_snapshot(&args.data)?;
    let engine = RecommendationEngine::new(&snapshot, ctx.config.clone());
    let interactions = engine.interactions(args.user)?;
    let rows = output::interaction_rows(&snapshot.catalog, &interactions);

    if ctx.json {
        output::write_json(out, &rows)
    } else {
        output::write_interactions(out, args.user, &rows)
    }
}
