use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ItemId;

/// How a user touched an item. Purchase wins over browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionLabel {
    Purchased,
    Browsed,
}

impl InteractionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionLabel::Purchased => "Purchased",
            InteractionLabel::Browsed => "Browsed",
        }
    }
}

/// An item the user has already interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub item_id: ItemId,
    pub label: InteractionLabel,
}

/// A user's collapsed interaction sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSignals {
    pub purchased: HashSet<ItemId>,
    pub browsed: HashSet<ItemId>,
}

impl UserSignals {
    /// True if the item was purchased or browsed.
    pub fn has_interacted(&self, item_id: ItemId) -> bool {
        self.purchased.contains(&item_id) || self.browsed.contains(&item_id)
    }

    pub fn label_for(&self, item_id: ItemId) -> Option<InteractionLabel> {
        if self.purchased.contains(&item_id) {
            Some(InteractionLabel::Purchased)
        } else if self.browsed.contains(&item_id) {
            Some(InteractionLabel::Browsed)
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.purchased.is_empty() && self.browsed.is_empty()
    }
}
