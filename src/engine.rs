//! Recommendation Engine - the public entry point
//!
//! Validates the context first, then the catalog, then ranks. A refused
//! request never touches the scorer.

use crate::catalog::Candidate;
use crate::conditions::{normalize, PartialConditions};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::explanation::RecommendationResponse;
use crate::ranker::{rank, Ranking};
use crate::scorer::{CandidateScorer, RuleScorer};

/// Holds the scorer and config shared across requests
///
/// Stateless between calls; safe to share behind an `Arc` and call from
/// many threads.
pub struct RecommendationEngine<S = RuleScorer> {
    scorer: S,
    config: EngineConfig,
}

impl RecommendationEngine<RuleScorer> {
    /// Engine backed by the rule pipeline with the config's weights
    pub fn new(config: EngineConfig) -> Self {
        let scorer = RuleScorer::new(config.weights.clone());
        Self { scorer, config }
    }
}

impl Default for RecommendationEngine<RuleScorer> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<S: CandidateScorer> RecommendationEngine<S> {
    /// Engine backed by a custom scorer
    pub fn with_scorer(scorer: S, config: EngineConfig) -> Self {
        Self { scorer, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Rank the catalog, surfacing refusals as errors
    pub fn try_recommend(
        &self,
        conditions: &PartialConditions,
        catalog: &[Candidate],
    ) -> Result<Ranking, EngineError> {
        let ctx = normalize(conditions)?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }

        tracing::debug!(
            "Recommending for '{}' ({:.4}, {:.4}) over {} candidates",
            ctx.location,
            ctx.coordinates.latitude,
            ctx.coordinates.longitude,
            catalog.len()
        );

        rank(&self.scorer, catalog, &ctx, &self.config)
    }

    /// Rank the catalog, folding refusals into the response
    pub fn recommend(
        &self,
        conditions: &PartialConditions,
        catalog: &[Candidate],
    ) -> RecommendationResponse {
        match self.try_recommend(conditions, catalog) {
            Ok(ranking) => RecommendationResponse {
                results: ranking.recommendations,
                can_perform: true,
                error: None,
                excluded: ranking.excluded,
            },
            Err(e) => {
                tracing::info!("Recommendation refused: {}", e);
                RecommendationResponse::cannot_perform(e.to_string())
            }
        }
    }
}

/// One-shot recommendation with default weights and top 5
pub fn recommend(conditions: &PartialConditions, catalog: &[Candidate]) -> RecommendationResponse {
    RecommendationEngine::default().recommend(conditions, catalog)
}
