//! Candidate Scorer - folds the rule pipeline into one score per candidate
//!
//! Scoring is pure: no shared state, safe to run on any number of threads.
//! The score starts at 0, each rule adds its delta, and the total is floored
//! at 0 (unbounded above). Reasons keep rule order.

use crate::catalog::{Candidate, NumericRange};
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;
use crate::error::ScoreError;
use crate::rules::{RuleKind, RULE_COUNT, RULE_PIPELINE};
use serde::Serialize;

/// Per-rule contributions, indexed in pipeline order
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown(pub [f64; RULE_COUNT]);

impl ScoreBreakdown {
    pub fn get(&self, kind: RuleKind) -> f64 {
        RULE_PIPELINE
            .iter()
            .position(|(k, _)| *k == kind)
            .map(|i| self.0[i])
            .unwrap_or(0.0)
    }

    /// Sum before the floor is applied
    pub fn raw_total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Candidate score result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    /// Final score, never negative
    pub score: f64,
    /// Explanations in rule order
    pub reasons: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

/// Something that can score a candidate against a context
///
/// The ranker is generic over this so alternative scorers (or test doubles)
/// can stand in for the rule pipeline.
pub trait CandidateScorer: Sync {
    fn score(&self, candidate: &Candidate, ctx: &ConditionContext)
        -> Result<CandidateScore, ScoreError>;
}

/// Scores with the seven-rule pipeline
#[derive(Debug, Clone, Default)]
pub struct RuleScorer {
    weights: ScoringWeights,
}

impl RuleScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl CandidateScorer for RuleScorer {
    fn score(
        &self,
        candidate: &Candidate,
        ctx: &ConditionContext,
    ) -> Result<CandidateScore, ScoreError> {
        score_candidate(candidate, ctx, &self.weights)
    }
}

/// Score one candidate with the rule pipeline
pub fn score_candidate(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> Result<CandidateScore, ScoreError> {
    validate(candidate)?;

    let mut breakdown = ScoreBreakdown::default();
    let mut reasons = Vec::new();

    for (i, (_, rule)) in RULE_PIPELINE.iter().enumerate() {
        let outcome = rule(candidate, ctx, weights);
        breakdown.0[i] = outcome.delta;
        reasons.extend(outcome.reasons);
    }

    let score = breakdown.raw_total().max(0.0);

    tracing::debug!(
        "Scored '{}' at {:.2} (raw {:.2}, {} reasons)",
        candidate.id,
        score,
        breakdown.raw_total(),
        reasons.len()
    );

    Ok(CandidateScore {
        score,
        reasons,
        breakdown,
    })
}

/// Reject data the rules cannot evaluate meaningfully
fn validate(candidate: &Candidate) -> Result<(), ScoreError> {
    if let Some(ideal) = &candidate.ideal_conditions {
        check_range(candidate, "water temperature", ideal.water_temperature)?;
        check_range(candidate, "air temperature", ideal.air_temperature)?;
        check_range(candidate, "flow rate", ideal.flow_rate)?;
    }

    if let Some(legacy) = &candidate.legacy_conditions {
        check_range(candidate, "legacy water temperature", legacy.water_temp)?;
    }

    if let Some(profile) = &candidate.scoring_profile {
        if let Some(boost) = profile
            .boosts
            .iter()
            .find(|b| !b.multiplier.is_finite() || !b.value.is_finite())
        {
            return Err(ScoreError::NonFiniteBoost {
                candidate: candidate.id.clone(),
                boost: boost.name.clone(),
            });
        }
    }

    if !candidate.historical_success_rate.is_finite() {
        return Err(ScoreError::InvalidSuccessRate {
            candidate: candidate.id.clone(),
            rate: candidate.historical_success_rate,
        });
    }

    Ok(())
}

fn check_range(
    candidate: &Candidate,
    field: &'static str,
    range: Option<NumericRange>,
) -> Result<(), ScoreError> {
    let Some(range) = range else {
        return Ok(());
    };

    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(ScoreError::NonFiniteRange {
            candidate: candidate.id.clone(),
            field,
        });
    }
    if range.min > range.max {
        return Err(ScoreError::InvertedRange {
            candidate: candidate.id.clone(),
            field,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        Boost, Comparator, IdealConditions, MatchedHatch, PatternCategory, ScoringProfile,
    };
    use crate::rules::fixtures::{candidate, context, tags};
    use approx::assert_relative_eq;

    #[test]
    fn test_bare_candidate_scores_zero() {
        let mut ctx = context();
        ctx.water_temperature_f = Some(55.0);
        ctx.flow_rate = Some(60.0);

        let result = score_candidate(
            &candidate(PatternCategory::Emerger),
            &ctx,
            &ScoringWeights::default(),
        )
        .unwrap();
        assert_eq!(result.score, 0.0);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_score_floor_when_every_penalty_fires() {
        let fly = candidate(PatternCategory::Nymph)
            .with_ideal_conditions(IdealConditions {
                water_temperature: Some(NumericRange::new(45.0, 65.0)),
                flow_rate: Some(NumericRange::new(100.0, 200.0)),
                ..Default::default()
            })
            .with_scoring_profile(ScoringProfile {
                required_fields: tags(&["season"]),
                ..Default::default()
            });
        let mut ctx = context();
        ctx.water_temperature_f = Some(95.0);
        ctx.flow_rate = Some(1000.0);

        let result = score_candidate(&fly, &ctx, &ScoringWeights::default()).unwrap();
        assert_relative_eq!(result.breakdown.raw_total(), -75.0);
        assert_eq!(result.score, 0.0);
        // Penalties still explain themselves
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn test_contributions_add_across_rules() {
        let fly = candidate(PatternCategory::Dry)
            .with_ideal_conditions(IdealConditions {
                water_temperature: Some(NumericRange::new(50.0, 70.0)),
                ..Default::default()
            })
            .with_matched_hatch(MatchedHatch {
                season: tags(&["summer"]),
                ..Default::default()
            })
            .with_scoring_profile(ScoringProfile {
                boosts: vec![Boost {
                    name: "Skinny Water".to_string(),
                    multiplier: 2.0,
                    field: "flowRate".to_string(),
                    operator: Comparator::AtMost,
                    value: 40.0,
                }],
                required_fields: tags(&["flowRate"]),
                ..Default::default()
            })
            .with_history(0.5, 20);
        let mut ctx = context();
        ctx.water_temperature_f = Some(60.0);
        ctx.flow_rate = Some(30.0);
        ctx.season = Some("summer".to_string());

        let result = score_candidate(&fly, &ctx, &ScoringWeights::default()).unwrap();
        // 80 (water) + 20 (boost) + 15 (required) + 30 (season) + 20 (low flow dry) + 5 (history)
        assert_relative_eq!(result.score, 170.0);
        assert_relative_eq!(result.breakdown.get(RuleKind::ProfileBoosts), 20.0);
        assert_relative_eq!(result.breakdown.get(RuleKind::HistoricalSuccess), 5.0);
        assert_eq!(result.reasons.len(), 4);
        assert!(result.reasons[0].starts_with("Water temp"));
        assert!(result.reasons[1].starts_with("Skinny Water boost"));
    }

    #[test]
    fn test_malformed_ranges_rejected() {
        let inverted = candidate(PatternCategory::Dry).with_ideal_conditions(IdealConditions {
            water_temperature: Some(NumericRange::new(70.0, 50.0)),
            ..Default::default()
        });
        assert!(matches!(
            score_candidate(&inverted, &context(), &ScoringWeights::default()),
            Err(ScoreError::InvertedRange { .. })
        ));

        let nan = candidate(PatternCategory::Dry).with_ideal_conditions(IdealConditions {
            flow_rate: Some(NumericRange::new(f64::NAN, 50.0)),
            ..Default::default()
        });
        assert!(matches!(
            score_candidate(&nan, &context(), &ScoringWeights::default()),
            Err(ScoreError::NonFiniteRange { .. })
        ));
    }

    #[test]
    fn test_rule_scorer_uses_its_weights() {
        let mut weights = ScoringWeights::default();
        weights.ideal.water_temperature = 100.0;
        let scorer = RuleScorer::new(weights);

        let fly = candidate(PatternCategory::Nymph).with_ideal_conditions(IdealConditions {
            water_temperature: Some(NumericRange::new(45.0, 65.0)),
            ..Default::default()
        });
        let mut ctx = context();
        ctx.water_temperature_f = Some(55.0);

        assert_relative_eq!(scorer.score(&fly, &ctx).unwrap().score, 100.0);
    }
}
