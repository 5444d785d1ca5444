//! RecommendationEngine: validates a request, runs the selected scorer, and
//! passes its output through the result filter.

use chrono::Utc;
use shelf_core::config::ShelfConfig;
use shelf_core::errors::{ShelfError, ShelfResult};
use shelf_core::models::{
    Algorithm, FallbackEvent, Interaction, Recommendations, Snapshot, UserId, UserSignals,
};
use shelf_core::traits::{IEmbeddingModel, IScorer, ScoringRequest};
use tracing::{debug, info, info_span, warn};
use uuid::Uuid;

use crate::collaborative::CollaborativeScorer;
use crate::content::ContentScorer;
use crate::hybrid::HybridScorer;
use crate::multimodal::MultiModalScorer;
use crate::ranking;
use crate::signals;

/// The main recommendation engine over one read-only snapshot.
///
/// Holds no mutable state, so one engine can serve concurrent requests.
pub struct RecommendationEngine<'a> {
    snapshot: &'a Snapshot,
    collaborative: CollaborativeScorer,
    content: ContentScorer,
    hybrid: HybridScorer,
    multimodal: MultiModalScorer<'a>,
    config: ShelfConfig,
}

impl<'a> RecommendationEngine<'a> {
    /// Create an engine without an embedding model. Multi-modal requests
    /// report `DependencyUnavailable` until one is attached.
    pub fn new(snapshot: &'a Snapshot, config: ShelfConfig) -> Self {
        Self {
            snapshot,
            collaborative: CollaborativeScorer::new(config.scoring.collaborative_normalization),
            content: ContentScorer::new(config.scoring.rating_scale),
            hybrid: HybridScorer::from_config(&config.scoring),
            multimodal: MultiModalScorer::new(None, config.embedding.clone()),
            config,
        }
    }

    /// Attach the embedding model used for multi-modal scoring.
    pub fn with_model(mut self, model: &'a dyn IEmbeddingModel) -> Self {
        self.multimodal = MultiModalScorer::new(Some(model), self.config.embedding.clone());
        self
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.snapshot
    }

    fn scorer(&self, algorithm: Algorithm) -> &dyn IScorer {
        match algorithm {
            Algorithm::Collaborative => &self.collaborative,
            Algorithm::ContentBased => &self.content,
            Algorithm::Hybrid => &self.hybrid,
            Algorithm::MultiModal => &self.multimodal,
        }
    }

    fn ensure_user(&self, user_id: UserId) -> ShelfResult<()> {
        if self.snapshot.has_user(user_id) {
            Ok(())
        } else {
            Err(ShelfError::UnknownUser { user_id })
        }
    }

    /// The user's collapsed purchase and browse sets.
    pub fn signals(&self, user_id: UserId) -> UserSignals {
        signals::extract(user_id, &self.snapshot.purchases, &self.snapshot.browsing)
    }

    /// Items the user already purchased or browsed, in catalog order.
    pub fn interactions(&self, user_id: UserId) -> ShelfResult<Vec<Interaction>> {
        self.ensure_user(user_id)?;
        Ok(signals::interactions(
            &self.snapshot.catalog,
            &self.signals(user_id),
        ))
    }

    /// Run one recommendation request.
    ///
    /// An empty `items` list is a valid answer, not an error.
    pub fn recommend(
        &self,
        user_id: UserId,
        algorithm: Algorithm,
        top_k: usize,
    ) -> ShelfResult<Recommendations> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!("recommend", %request_id, user_id, %algorithm, top_k);
        let _guard = span.enter();

        if top_k == 0 {
            return Err(ShelfError::InvalidTopK { top_k });
        }
        self.ensure_user(user_id)?;

        let signals = self.signals(user_id);
        debug!(
            purchased = signals.purchased.len(),
            browsed = signals.browsed.len(),
            "signals extracted"
        );

        let scorer = self.scorer(algorithm);
        let candidates = scorer.score(&ScoringRequest {
            user_id,
            snapshot: self.snapshot,
            signals: &signals,
        })?;
        debug!(
            scorer = scorer.name(),
            source = scorer.source().label(),
            candidates = candidates.len(),
            "scorer finished"
        );

        let items = ranking::filter_and_rank(candidates, &signals, top_k);
        if items.is_empty() {
            info!("no recommendations available for this user");
        } else {
            info!(returned = items.len(), "recommendation complete");
        }

        Ok(Recommendations {
            request_id,
            user_id,
            algorithm,
            top_k,
            items,
            fallback: None,
            generated_at: Utc::now(),
        })
    }

    /// Like [`recommend`](Self::recommend), with the algorithm given by name.
    pub fn recommend_by_name(
        &self,
        user_id: UserId,
        algorithm: &str,
        top_k: usize,
    ) -> ShelfResult<Recommendations> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.recommend(user_id, algorithm, top_k)
    }

    /// Like [`recommend`](Self::recommend), but when multi-modal scoring is
    /// unavailable the request is answered by `recommend.multimodal_fallback`
    /// and the substitution is recorded in `fallback`.
    pub fn recommend_with_fallback(
        &self,
        user_id: UserId,
        algorithm: Algorithm,
        top_k: usize,
    ) -> ShelfResult<Recommendations> {
        match self.recommend(user_id, algorithm, top_k) {
            Err(e) if e.is_dependency_unavailable() && algorithm == Algorithm::MultiModal => {
                let Some(fallback) = self
                    .config
                    .recommend
                    .multimodal_fallback
                    .filter(|fb| *fb != Algorithm::MultiModal)
                else {
                    return Err(e);
                };
                warn!(
                    user_id,
                    requested = %algorithm,
                    fallback = %fallback,
                    error = %e,
                    "multi-modal unavailable, falling back"
                );
                let mut recs = self.recommend(user_id, fallback, top_k)?;
                recs.fallback = Some(FallbackEvent {
                    requested: algorithm,
                    used: fallback,
                    reason: e.to_string(),
                    timestamp: Utc::now(),
                });
                Ok(recs)
            }
            other => other,
        }
    }
}
