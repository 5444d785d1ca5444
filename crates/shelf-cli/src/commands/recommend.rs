//! shelf recommend - Rank recommendations for one user

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use shelf_core::models::{Algorithm, UserId};
use shelf_embeddings::create_model;
use shelf_scoring::RecommendationEngine;
use tracing::debug;

use crate::app::AppContext;
use crate::output;

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Snapshot JSON (users, items, purchases, browsing, item_images)
    #[arg(long, env = "SHELF_DATA")]
    pub data: PathBuf,

    /// User to recommend for
    #[arg(long, short)]
    pub user: UserId,

    /// collaborative, content-based, hybrid or multi-modal
    #[arg(long, short, default_value = "hybrid")]
    pub algorithm: String,

    /// Maximum number of results (defaults to recommend.default_top_k)
    #[arg(long, short = 'k')]
    pub top_k: Option<usize>,

    /// Fail instead of substituting another algorithm when multi-modal is unavailable
    #[arg(long)]
    pub no_fallback: bool,
}

pub fn run(ctx: &AppContext, args: &RecommendArgs, out: &mut impl Write) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let top_k = args.top_k.unwrap_or(ctx.config.recommend.default_top_k);

    let snapshot = ctx.load_snapshot(&args.data)?;
    let model = create_model(&ctx.config.embedding);
    let mut engine = RecommendationEngine::new(&snapshot, ctx.config.clone());
    if let Some(model) = model.as_deref() {
        engine = engine.with_model(model);
    }

    let interactions = engine.interactions(args.user)?;
    let recs = if args.no_fallback {
        engine.recommend(args.user, algorithm, top_k)?
    } else {
        engine.recommend_with_fallback(args.user, algorithm, top_k)?
    };
    debug!(request_id = %recs.request_id, rows = recs.len(), "rendering recommendations");

    let report = output::recommend_report(&snapshot.catalog, &interactions, recs);
    if ctx.json {
        output::write_json(out, &report)
    } else {
        output::write_report(out, &report)
    }
}
