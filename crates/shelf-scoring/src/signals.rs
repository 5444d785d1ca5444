//! Signal extraction: a user's purchased and browsed sets.

use shelf_core::models::{
    BrowseEvent, Catalog, Interaction, PurchaseEvent, UserId, UserSignals,
};

/// Collapse the event logs into the user's purchased and browsed sets.
///
/// An unknown user simply yields two empty sets.
pub fn extract(user_id: UserId, purchases: &[PurchaseEvent], browsing: &[BrowseEvent]) -> UserSignals {
    UserSignals {
        purchased: purchases
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.item_id)
            .collect(),
        browsed: browsing
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.item_id)
            .collect(),
    }
}

/// Labelled interactions in catalog order. Events pointing at items missing
/// from the catalog are not listed.
pub fn interactions(catalog: &Catalog, signals: &UserSignals) -> Vec<Interaction> {
    catalog
        .iter()
        .filter_map(|item| {
            signals.label_for(item.item_id).map(|label| Interaction {
                item_id: item.item_id,
                label,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::models::{InteractionLabel, Item};

    #[test]
    fn duplicates_collapse() {
        let purchases = vec![
            PurchaseEvent::new(1, 10),
            PurchaseEvent::new(1, 10),
            PurchaseEvent::new(2, 11),
        ];
        let browsing = vec![BrowseEvent::new(1, 12), BrowseEvent::new(1, 12)];
        let s = extract(1, &purchases, &browsing);
        assert_eq!(s.purchased.len(), 1);
        assert!(s.purchased.contains(&10));
        assert_eq!(s.browsed.len(), 1);
        assert!(s.browsed.contains(&12));
    }

    #[test]
    fn unknown_user_yields_empty_sets() {
        let s = extract(99, &[PurchaseEvent::new(1, 10)], &[BrowseEvent::new(1, 10)]);
        assert!(s.is_empty());
    }

    #[test]
    fn interactions_follow_catalog_order_and_skip_dangling() {
        let catalog = Catalog::new(vec![
            Item::new(3, "c", 1.0, 3.0),
            Item::new(1, "a", 1.0, 3.0),
            Item::new(2, "b", 1.0, 3.0),
        ])
        .unwrap();
        let s = extract(
            7,
            &[PurchaseEvent::new(7, 1), PurchaseEvent::new(7, 404)],
            &[BrowseEvent::new(7, 3), BrowseEvent::new(7, 1)],
        );
        let found = interactions(&catalog, &s);
        assert_eq!(
            found,
            vec![
                Interaction {
                    item_id: 3,
                    label: InteractionLabel::Browsed
                },
                Interaction {
                    item_id: 1,
                    label: InteractionLabel::Purchased
                },
            ]
        );
    }
}
