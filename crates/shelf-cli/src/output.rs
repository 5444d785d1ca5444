//! Human-readable and JSON rendering of command results.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;
use shelf_core::models::{
    Catalog, FallbackEvent, Interaction, InteractionLabel, ItemId, Recommendations, Source, UserId,
};

pub const NO_RECOMMENDATIONS: &str = "No recommendations available for this user.";
pub const NO_INTERACTIONS: &str = "No prior interactions found for this user.";

/// An interaction joined with its catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionRow {
    pub item_id: ItemId,
    pub name: String,
    pub label: InteractionLabel,
}

/// A recommendation joined with its catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRow {
    pub rank: usize,
    pub item_id: ItemId,
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub category: Option<String>,
    pub score: f64,
    pub source: Source,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendReport {
    pub request_id: String,
    pub user_id: UserId,
    pub algorithm: String,
    pub top_k: usize,
    pub interactions: Vec<InteractionRow>,
    pub recommendations: Vec<RecommendationRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<FallbackEvent>,
}

pub fn interaction_rows(catalog: &Catalog, interactions: &[Interaction]) -> Vec<InteractionRow> {
    interactions
        .iter()
        .map(|i| InteractionRow {
            item_id: i.item_id,
            name: catalog
                .get(i.item_id)
                .map(|item| item.name.clone())
                .unwrap_or_default(),
            label: i.label,
        })
        .collect()
}

pub fn recommend_report(
    catalog: &Catalog,
    interactions: &[Interaction],
    recs: Recommendations,
) -> RecommendReport {
    let recommendations = recs
        .items
        .iter()
        .enumerate()
        .map(|(pos, r)| {
            let item = catalog.get(r.item_id);
            RecommendationRow {
                rank: pos + 1,
                item_id: r.item_id,
                name: item.map(|i| i.name.clone()).unwrap_or_default(),
                price: item.map(|i| i.price).unwrap_or_default(),
                rating: item.map(|i| i.rating).unwrap_or_default(),
                category: item.and_then(|i| i.category.clone()),
                score: r.score,
                source: r.source,
            }
        })
        .collect();

    RecommendReport {
        request_id: recs.request_id,
        user_id: recs.user_id,
        algorithm: recs.algorithm.to_string(),
        top_k: recs.top_k,
        interactions: interaction_rows(catalog, interactions),
        recommendations,
        fallback: recs.fallback,
    }
}

pub fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_interactions(out: &mut impl Write, user_id: UserId, rows: &[InteractionRow]) -> Result<()> {
    writeln!(out, "Interacted items for user {user_id}:")?;
    if rows.is_empty() {
        writeln!(out, "  {NO_INTERACTIONS}")?;
        return Ok(());
    }
    writeln!(out, "  {:>6}  {:<32}  {}", "ID", "NAME", "LABEL")?;
    for row in rows {
        writeln!(
            out,
            "  {:>6}  {:<32}  {}",
            row.item_id,
            truncate(&row.name, 32),
            row.label.as_str()
        )?;
    }
    Ok(())
}

pub fn write_report(out: &mut impl Write, report: &RecommendReport) -> Result<()> {
    write_interactions(out, report.user_id, &report.interactions)?;
    writeln!(out)?;

    if let Some(fallback) = &report.fallback {
        writeln!(
            out,
            "Note: {} unavailable ({}), showing {} results.",
            fallback.requested, fallback.reason, fallback.used
        )?;
    }
    writeln!(
        out,
        "Recommendations ({}, top {}):",
        report.algorithm, report.top_k
    )?;
    if report.recommendations.is_empty() {
        writeln!(out, "  {NO_RECOMMENDATIONS}")?;
        return Ok(());
    }

    writeln!(
        out,
        "  {:>4}  {:>6}  {:<32}  {:>9}  {:>6}  {:<14}  {:>8}  {}",
        "RANK", "ID", "NAME", "PRICE", "RATING", "CATEGORY", "SCORE", "SOURCE"
    )?;
    for row in &report.recommendations {
        writeln!(
            out,
            "  {:>4}  {:>6}  {:<32}  {:>9.2}  {:>6.1}  {:<14}  {:>8.4}  {}",
            row.rank,
            row.item_id,
            truncate(&row.name, 32),
            row.price,
            row.rating,
            truncate(row.category.as_deref().unwrap_or("-"), 14),
            row.score,
            row.source.label()
        )?;
    }
    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}
