//! RULE 2: SCORING-PROFILE BOOSTS
//!
//! Each boost names a numeric context field (flow rate, water or air
//! temperature), a comparator and a threshold. When the reading is present
//! and the comparison holds, the boost adds `multiplier × 10` and a reason
//! naming it. Boosts on unknown or non-numeric fields are skipped.

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;

pub fn score_profile_boosts(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let Some(profile) = &candidate.scoring_profile else {
        return outcome;
    };

    for boost in &profile.boosts {
        let Some(field) = boost.target() else {
            continue;
        };
        let Some(value) = ctx.numeric(field) else {
            continue;
        };

        if boost.operator.evaluate(value, boost.value) {
            outcome.add_with_reason(
                boost.multiplier * weights.boost_scale,
                format!(
                    "{} boost ({} {} {:.1})",
                    boost.name,
                    field.display_name(),
                    boost.operator.symbol(),
                    boost.value
                ),
            );
        }
    }

    outcome
}
