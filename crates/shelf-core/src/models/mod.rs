//! Snapshot data model and engine output types.

pub mod algorithm;
pub mod events;
pub mod fallback_event;
pub mod image;
pub mod interaction;
pub mod item;
pub mod recommendation;
pub mod relation_graph;
pub mod snapshot;

pub use algorithm::{Algorithm, Source};
pub use events::{BrowseEvent, PurchaseEvent};
pub use fallback_event::FallbackEvent;
pub use image::{ImageRecord, ImageTable};
pub use interaction::{Interaction, InteractionLabel, UserSignals};
pub use item::{Item, User};
pub use recommendation::{Candidate, Recommendations, ScoredRecommendation};
pub use relation_graph::RelationGraph;
pub use snapshot::{Catalog, Snapshot};

/// User identifier (positive integer).
pub type UserId = u64;

/// Catalog item identifier.
pub type ItemId = u64;
