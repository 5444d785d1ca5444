use serde::{Deserialize, Serialize};

/// Zero-based user→item edge list handed to the embedding model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationGraph {
    /// `(user_index, item_index)` pairs, deduplicated, in first-seen order.
    pub edges: Vec<(usize, usize)>,
}

impl RelationGraph {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges touching `item_index`.
    pub fn item_degree(&self, item_index: usize) -> usize {
        self.edges.iter().filter(|(_, i)| *i == item_index).count()
    }
}
