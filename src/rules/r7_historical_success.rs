//! RULE 7: HISTORICAL SUCCESS
//!
//! Patterns with an established track record (more than 10 reported uses)
//! earn `success_rate × 10`. Silent.

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;

pub fn score_historical_success(
    candidate: &Candidate,
    _ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let w = &weights.historical;

    if candidate.historical_use_count > w.min_use_count {
        outcome.add(candidate.historical_success_rate.clamp(0.0, 1.0) * w.scale);
    }
    outcome
}
