//! RULE 1: IDEAL-RANGE MATCHING (dominant weight)
//!
//! For water temperature, flow rate and air temperature, compares the reading
//! against the candidate's ideal range:
//!   - in range:   +base × match_quality  (water 80, flow 70, air 50)
//!   - out of range: water −min(distance × 2, 30), flow −min(distance × 0.5, 25),
//!     air no penalty (missed bonus only)
//!
//! Temperature ranges go through the Celsius heuristic first; flow is never
//! converted. Each evaluated factor emits one reason. A weather description
//! containing any accepted entry adds a flat 40.

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;
use crate::matching::{any_contains, compare_to_range, to_fahrenheit};

pub fn score_ideal_ranges(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let Some(ideal) = &candidate.ideal_conditions else {
        return outcome;
    };
    let w = &weights.ideal;

    // Water temperature
    if let (Some(range), Some(value)) = (ideal.water_temperature, ctx.water_temperature_f) {
        let range = to_fahrenheit(&range, weights.celsius_threshold);
        let comp = compare_to_range(value, range, w.min_match_quality);
        let reason = comp.format_with_context("Water temp", "°F");
        if comp.is_within_range() {
            outcome.add_with_reason(w.water_temperature * comp.match_quality, reason);
        } else {
            let penalty = comp.penalty(w.water_penalty_per_degree, w.water_penalty_cap);
            outcome.add_with_reason(-penalty, reason);
        }
    }

    // Flow rate (unit-free)
    if let (Some(range), Some(value)) = (ideal.flow_rate, ctx.flow_rate) {
        let comp = compare_to_range(value, range, w.min_match_quality);
        let reason = comp.format_with_context("Flow rate", " cfs");
        if comp.is_within_range() {
            outcome.add_with_reason(w.flow_rate * comp.match_quality, reason);
        } else {
            let penalty = comp.penalty(w.flow_penalty_per_unit, w.flow_penalty_cap);
            outcome.add_with_reason(-penalty, reason);
        }
    }

    // Air temperature
    if let (Some(range), Some(value)) = (ideal.air_temperature, ctx.air_temperature_f) {
        let range = to_fahrenheit(&range, weights.celsius_threshold);
        let comp = compare_to_range(value, range, w.min_match_quality);
        let reason = comp.format_with_context("Air temp", "°F");
        let points = if comp.is_within_range() {
            w.air_temperature * comp.match_quality
        } else {
            0.0
        };
        outcome.add_with_reason(points, reason);
    }

    // Weather description
    if let Some(description) = ctx.weather_description.as_deref() {
        if let Some(accepted) = any_contains(description, &ideal.weather) {
            outcome.add_with_reason(
                w.weather,
                format!("Weather '{}' suits this pattern ({})", description.trim(), accepted),
            );
        }
    }

    outcome
}
