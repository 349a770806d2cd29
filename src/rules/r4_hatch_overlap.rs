//! RULE 4: MATCHED-HATCH OVERLAP
//!
//! Case-insensitive substring overlap (either direction) between the context
//! tags and the hatch the pattern imitates:
//!   season +30 (reason), time of day +25 (reason),
//!   water conditions +20, weather conditions +20 (both silent).

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;
use crate::matching::overlaps_any;

pub fn score_hatch_overlap(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let Some(hatch) = &candidate.matched_hatch else {
        return outcome;
    };
    let w = &weights.hatch;

    if let Some(season) = ctx.season.as_deref() {
        if overlaps_any(season, &hatch.season).is_some() {
            outcome.add_with_reason(w.season, format!("Hatch active in {}", season.trim()));
        }
    }

    if let Some(time) = ctx.time_of_day.as_deref() {
        if overlaps_any(time, &hatch.time_of_day).is_some() {
            outcome.add_with_reason(w.time_of_day, format!("Hatch active during {}", time.trim()));
        }
    }

    if let Some(water) = ctx.water_flow_qualitative.as_deref() {
        if overlaps_any(water, &hatch.water_conditions).is_some() {
            outcome.add(w.water_conditions);
        }
    }

    if let Some(weather) = ctx.weather_qualitative.as_deref() {
        if overlaps_any(weather, &hatch.weather_conditions).is_some() {
            outcome.add(w.weather);
        }
    }

    outcome
}
