use serde::{Deserialize, Serialize};

use super::{ItemId, UserId};

/// A registered user. The engine reads nothing but the identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
}

/// A purchasable catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "product_id")]
    pub item_id: ItemId,
    #[serde(default, alias = "product_name")]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    /// Rating on a 0–5 scale.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(item_id: ItemId, name: impl Into<String>, price: f64, rating: f64) -> Self {
        Self {
            item_id,
            name: name.into(),
            price,
            rating,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
