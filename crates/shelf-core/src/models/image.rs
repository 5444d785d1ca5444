use serde::{Deserialize, Serialize};

use super::ItemId;

/// Image metadata for one item. Opaque to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    #[serde(alias = "product_id")]
    pub item_id: ItemId,
    #[serde(default)]
    pub image_path: String,
    #[serde(default)]
    pub view: Option<String>,
}

/// Item image table, passed through to the embedding model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageTable {
    records: Vec<ImageRecord>,
}

impl ImageTable {
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }

    /// All image records attached to `item_id`.
    pub fn for_item(&self, item_id: ItemId) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter().filter(move |r| r.item_id == item_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
