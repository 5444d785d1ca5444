use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BrowseEvent, ImageRecord, ImageTable, Item, ItemId, PurchaseEvent, User, UserId};
use crate::errors::{DataError, ShelfResult};

/// The item catalog in its original order, indexed by item id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<Item>) -> ShelfResult<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            if index.insert(item.item_id, pos).is_some() {
                return Err(DataError::DuplicateItem {
                    item_id: item.item_id,
                }
                .into());
            }
        }
        Ok(Self { items, index })
    }

    pub fn get(&self, item_id: ItemId) -> Option<&Item> {
        self.index.get(&item_id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.index.contains_key(&item_id)
    }

    /// Items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the catalog carries a category attribute at all.
    pub fn has_categories(&self) -> bool {
        self.items.iter().any(|i| i.category.is_some())
    }

    /// Whether the catalog carries a description attribute at all.
    pub fn has_descriptions(&self) -> bool {
        self.items.iter().any(|i| i.description.is_some())
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = crate::errors::ShelfError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Catalog::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items
    }
}

/// On-disk layout of a snapshot document. Every table is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotDocument {
    users: Vec<User>,
    #[serde(alias = "products")]
    items: Vec<Item>,
    purchases: Vec<PurchaseEvent>,
    #[serde(alias = "browsing_history")]
    browsing: Vec<BrowseEvent>,
    #[serde(alias = "product_images")]
    item_images: Vec<ImageRecord>,
}

/// Read-only view of users, catalog, event logs and image metadata for the
/// lifetime of one or more requests.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    users: Vec<User>,
    user_index: HashSet<UserId>,
    pub catalog: Catalog,
    pub purchases: Vec<PurchaseEvent>,
    pub browsing: Vec<BrowseEvent>,
    pub images: ImageTable,
}

impl Snapshot {
    pub fn new(
        users: Vec<User>,
        catalog: Catalog,
        purchases: Vec<PurchaseEvent>,
        browsing: Vec<BrowseEvent>,
        images: ImageTable,
    ) -> ShelfResult<Self> {
        let mut user_index = HashSet::with_capacity(users.len());
        for user in &users {
            if !user_index.insert(user.user_id) {
                return Err(DataError::DuplicateUser {
                    user_id: user.user_id,
                }
                .into());
            }
        }
        Ok(Self {
            users,
            user_index,
            catalog,
            purchases,
            browsing,
            images,
        })
    }

    /// Parse a snapshot from a JSON document.
    pub fn from_json(json: &str) -> ShelfResult<Self> {
        let doc: SnapshotDocument = serde_json::from_str(json)?;
        Self::new(
            doc.users,
            Catalog::new(doc.items)?,
            doc.purchases,
            doc.browsing,
            ImageTable::new(doc.item_images),
        )
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ShelfResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DataError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn has_user(&self, user_id: UserId) -> bool {
        self.user_index.contains(&user_id)
    }
}
