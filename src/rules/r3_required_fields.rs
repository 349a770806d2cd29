//! RULE 3: REQUIRED-FIELD COMPLETENESS
//!
//! A profile may list context fields it needs for a confident score.
//! All present → +15, any missing → −20. Unknown names count as missing.
//! Silent: the outcome never adds reasons.

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::{ConditionContext, ContextField};
use crate::config::ScoringWeights;

pub fn score_required_fields(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let Some(profile) = &candidate.scoring_profile else {
        return outcome;
    };
    if profile.required_fields.is_empty() {
        return outcome;
    }

    let all_present = profile.required_fields.iter().all(|name| {
        name.parse::<ContextField>()
            .map(|field| ctx.has_field(field))
            .unwrap_or(false)
    });

    if all_present {
        outcome.add(weights.required_fields_bonus);
    } else {
        outcome.add(-weights.required_fields_penalty);
    }
    outcome
}
