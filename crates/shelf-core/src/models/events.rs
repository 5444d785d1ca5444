use serde::{Deserialize, Serialize};

use super::{ItemId, UserId};

/// One purchase. Repeated pairs collapse to plain membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseEvent {
    pub user_id: UserId,
    #[serde(alias = "product_id")]
    pub item_id: ItemId,
}

impl PurchaseEvent {
    pub fn new(user_id: UserId, item_id: ItemId) -> Self {
        Self { user_id, item_id }
    }
}

/// One item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrowseEvent {
    pub user_id: UserId,
    #[serde(alias = "product_id")]
    pub item_id: ItemId,
}

impl BrowseEvent {
    pub fn new(user_id: UserId, item_id: ItemId) -> Self {
        Self { user_id, item_id }
    }
}
