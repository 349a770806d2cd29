//! Ranker - scores a catalog, orders it and keeps the best few
//!
//! Scoring runs on rayon's pool by default. Order of the collected results
//! matches catalog order either way, and the sort is stable, so equal scores
//! keep their catalog order. A scorer that panics on one candidate only
//! excludes that candidate.

use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::EngineConfig;
use crate::error::{EngineError, ScoreError};
use crate::explanation::{ExcludedCandidate, ExplanationGenerator, Recommendation};
use crate::scorer::{CandidateScore, CandidateScorer};
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Ranked recommendations plus the candidates that could not be scored
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    pub recommendations: Vec<Recommendation>,
    pub excluded: Vec<ExcludedCandidate>,
}

/// Score, sort and truncate a catalog against a normalized context
///
/// A candidate whose data cannot be scored is excluded from the ranking and
/// reported in `excluded`; the rest of the catalog is still ranked.
pub fn rank<S: CandidateScorer>(
    scorer: &S,
    candidates: &[Candidate],
    ctx: &ConditionContext,
    config: &EngineConfig,
) -> Result<Ranking, EngineError> {
    if candidates.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }

    let start = Instant::now();

    let scored: Vec<(&Candidate, Result<CandidateScore, ScoreError>)> = if config.parallel {
        candidates
            .par_iter()
            .map(|c| (c, score_isolated(scorer, c, ctx)))
            .collect()
    } else {
        candidates
            .iter()
            .map(|c| (c, score_isolated(scorer, c, ctx)))
            .collect()
    };

    let mut kept = Vec::with_capacity(scored.len());
    let mut excluded = Vec::new();
    for (candidate, result) in scored {
        match result {
            Ok(score) => kept.push((candidate, score)),
            Err(e) => {
                tracing::warn!("Excluding '{}' from ranking: {}", candidate.id, e);
                excluded.push(ExcludedCandidate {
                    id: candidate.id.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    // Descending; stable so ties keep catalog order
    kept.sort_by(|a, b| b.1.score.total_cmp(&a.1.score));
    kept.truncate(config.top_n);

    let recommendations: Vec<Recommendation> = kept
        .into_iter()
        .map(|(candidate, score)| ExplanationGenerator::generate(candidate, score, config))
        .collect();

    tracing::info!(
        "Ranked {} candidates in {:?}: {} returned, {} excluded",
        candidates.len(),
        start.elapsed(),
        recommendations.len(),
        excluded.len()
    );

    Ok(Ranking {
        recommendations,
        excluded,
    })
}

/// Score one candidate, turning a panic into a `ScoreError`
fn score_isolated<S: CandidateScorer>(
    scorer: &S,
    candidate: &Candidate,
    ctx: &ConditionContext,
) -> Result<CandidateScore, ScoreError> {
    match panic::catch_unwind(AssertUnwindSafe(|| scorer.score(candidate, ctx))) {
        Ok(result) => result,
        Err(payload) => Err(ScoreError::ScorerPanicked {
            candidate: candidate.id.clone(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NumericRange, PatternCategory};
    use crate::conditions::Coordinates;
    use crate::scorer::{RuleScorer, ScoreBreakdown};
    use rustc_hash::FxHashMap;

    /// Returns a fixed score per candidate id
    struct FixedScorer(FxHashMap<String, f64>);

    impl CandidateScorer for FixedScorer {
        fn score(
            &self,
            candidate: &Candidate,
            _ctx: &ConditionContext,
        ) -> Result<CandidateScore, ScoreError> {
            Ok(CandidateScore {
                score: self.0.get(&candidate.id).copied().unwrap_or(0.0),
                reasons: vec![format!("fixed score for {}", candidate.id)],
                breakdown: ScoreBreakdown::default(),
            })
        }
    }

    fn ctx() -> ConditionContext {
        ConditionContext::at("Bow River", Coordinates::new(51.0, -115.0))
    }

    fn catalog(ids: &[&str]) -> Vec<Candidate> {
        ids.iter()
            .map(|id| Candidate::new(*id, id.to_uppercase(), PatternCategory::Dry))
            .collect()
    }

    fn fixed(scores: &[(&str, f64)]) -> FixedScorer {
        FixedScorer(scores.iter().map(|(id, s)| (id.to_string(), *s)).collect())
    }

    fn ids(ranking: &Ranking) -> Vec<&str> {
        ranking.recommendations.iter().map(|r| r.fly.id.as_str()).collect()
    }

    #[test]
    fn test_empty_catalog() {
        let result = rank(&RuleScorer::default(), &[], &ctx(), &EngineConfig::default());
        assert_eq!(result.unwrap_err(), EngineError::EmptyCatalog);
    }

    #[test]
    fn test_descending_and_truncated() {
        let scorer = fixed(&[("a", 10.0), ("b", 50.0), ("c", 30.0), ("d", 40.0)]);
        let config = EngineConfig::default().with_top_n(3);
        let ranking = rank(&scorer, &catalog(&["a", "b", "c", "d"]), &ctx(), &config).unwrap();

        assert_eq!(ids(&ranking), vec!["b", "d", "c"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let scorer = fixed(&[("x", 20.0), ("y", 20.0), ("z", 20.0)]);
        for config in [EngineConfig::default(), EngineConfig::default().sequential()] {
            let ranking = rank(&scorer, &catalog(&["x", "y", "z"]), &ctx(), &config).unwrap();
            assert_eq!(ids(&ranking), vec!["x", "y", "z"]);
        }
    }

    #[test]
    fn test_malformed_candidate_excluded() {
        let broken = Candidate::new("broken", "Broken", PatternCategory::Nymph).with_ideal_conditions(
            crate::catalog::IdealConditions {
                water_temperature: Some(NumericRange::new(60.0, 40.0)),
                ..Default::default()
            },
        );
        let good = Candidate::new("good", "Good", PatternCategory::Nymph);

        let ranking = rank(
            &RuleScorer::default(),
            &[broken, good],
            &ctx(),
            &EngineConfig::default(),
        )
        .unwrap();

        assert_eq!(ids(&ranking), vec!["good"]);
        assert_eq!(ranking.excluded.len(), 1);
        assert_eq!(ranking.excluded[0].id, "broken");
        assert!(ranking.excluded[0].error.contains("inverted"));
    }

    /// Panics on one id, scores everything else 10
    struct PanickyScorer(&'static str);

    impl CandidateScorer for PanickyScorer {
        fn score(
            &self,
            candidate: &Candidate,
            _ctx: &ConditionContext,
        ) -> Result<CandidateScore, ScoreError> {
            if candidate.id == self.0 {
                panic!("bad data in {}", candidate.id);
            }
            Ok(CandidateScore {
                score: 10.0,
                reasons: Vec::new(),
                breakdown: ScoreBreakdown::default(),
            })
        }
    }

    #[test]
    fn test_panicking_scorer_excludes_only_that_candidate() {
        let scorer = PanickyScorer("b");
        for config in [EngineConfig::default(), EngineConfig::default().sequential()] {
            let ranking = rank(&scorer, &catalog(&["a", "b", "c"]), &ctx(), &config).unwrap();

            assert_eq!(ids(&ranking), vec!["a", "c"]);
            assert_eq!(ranking.excluded.len(), 1);
            assert_eq!(ranking.excluded[0].id, "b");
            assert!(ranking.excluded[0].error.contains("bad data in b"));
        }
    }

    #[test]
    fn test_fewer_candidates_than_top_n() {
        let scorer = fixed(&[("a", 1.0)]);
        let ranking = rank(&scorer, &catalog(&["a"]), &ctx(), &EngineConfig::default()).unwrap();
        assert_eq!(ranking.recommendations.len(), 1);
        assert_eq!(ranking.recommendations[0].reason, "fixed score for a");
    }
}
