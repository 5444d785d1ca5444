//! Platform-wide best sellers, used when personalized scoring finds nothing.

use std::collections::HashMap;

use shelf_core::models::{ItemId, PurchaseEvent, ScoredRecommendation, Snapshot, Source, UserSignals};

/// The `n` most purchased item ids, most purchased first. Ties keep the
/// order of first appearance in the purchase log.
pub fn best_sellers(purchases: &[PurchaseEvent], n: usize) -> Vec<ItemId> {
    let mut counts: HashMap<ItemId, usize> = HashMap::new();
    let mut first_seen: Vec<ItemId> = Vec::new();
    for event in purchases {
        let count = counts.entry(event.item_id).or_default();
        if *count == 0 {
            first_seen.push(event.item_id);
        }
        *count += 1;
    }

    // Stable sort keeps first-appearance order among equal counts.
    first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));
    first_seen.truncate(n);
    first_seen
}

/// Popularity rows for the user: the top-`n` best sellers, then items
/// missing from the catalog or already touched by the user are dropped.
pub fn fallback(
    snapshot: &Snapshot,
    signals: &UserSignals,
    n: usize,
    score: f64,
) -> Vec<ScoredRecommendation> {
    best_sellers(&snapshot.purchases, n)
        .into_iter()
        .filter(|&id| snapshot.catalog.contains(id) && !signals.has_interacted(id))
        .map(|id| ScoredRecommendation::new(id, score, Source::Popular))
        .collect()
}
