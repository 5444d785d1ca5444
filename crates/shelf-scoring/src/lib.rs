//! # shelf-scoring
//!
//! The scoring engine. One request runs one primary scorer, then the shared
//! result filter.
//!
//! ## Architecture
//!
//! ```text
//! RecommendationEngine
//! ├── signals (purchased / browsed sets, interaction labels)
//! ├── IScorer, selected by Algorithm
//! │   ├── CollaborativeScorer (co-purchase frequency × rating)
//! │   ├── ContentScorer (category affinity × average browsed rating)
//! │   ├── HybridScorer
//! │   │   ├── Collaborative + Content (concatenated, no re-normalization)
//! │   │   ├── Popularity fallback (best sellers, fixed score)
//! │   │   └── Deduplication (highest score wins)
//! │   └── MultiModalScorer (IEmbeddingModel → row mean)
//! └── ranking::filter (drop interacted → default scores → sort → dedup → top-K)
//! ```

pub mod collaborative;
pub mod content;
pub mod engine;
pub mod hybrid;
pub mod multimodal;
pub mod normalize;
pub mod ranking;
pub mod signals;

pub use collaborative::CollaborativeScorer;
pub use content::ContentScorer;
pub use engine::RecommendationEngine;
pub use hybrid::HybridScorer;
pub use multimodal::MultiModalScorer;
