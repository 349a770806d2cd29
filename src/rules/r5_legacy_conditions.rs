//! RULE 5: LEGACY-CONDITIONS OVERLAP
//!
//! Entries still carrying the older `conditions` block are scored on it
//! independently of rules 1 and 4:
//!   weather +30, time of day +25, season +25 (whole-tag containment),
//!   water temperature in range +40 (no partial credit, no penalty).
//! Legacy ranges predate the Celsius convention and are compared as authored.
//! Silent.

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;
use crate::matching::contains_tag;

pub fn score_legacy_conditions(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let Some(legacy) = &candidate.legacy_conditions else {
        return outcome;
    };
    let w = &weights.legacy;

    if let Some(weather) = ctx.weather_description.as_deref() {
        if contains_tag(&legacy.weather, weather) {
            outcome.add(w.weather);
        }
    }

    if let Some(time) = ctx.time_of_day.as_deref() {
        if contains_tag(&legacy.time_of_day, time) {
            outcome.add(w.time_of_day);
        }
    }

    if let Some(season) = ctx.season.as_deref() {
        if contains_tag(&legacy.season, season) {
            outcome.add(w.season);
        }
    }

    if let (Some(range), Some(value)) = (legacy.water_temp, ctx.water_temperature_f) {
        if range.contains(value) {
            outcome.add(w.water_temperature);
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LegacyConditions, NumericRange, PatternCategory};
    use crate::rules::fixtures::{candidate, context, tags};
    use approx::assert_relative_eq;

    fn legacy_fly() -> Candidate {
        candidate(PatternCategory::Wet).with_legacy_conditions(LegacyConditions {
            weather: tags(&["cloudy", "rainy"]),
            time_of_day: tags(&["morning", "evening"]),
            season: tags(&["spring"]),
            water_temp: Some(NumericRange::new(48.0, 62.0)),
        })
    }

    #[test]
    fn test_all_legacy_checks_hit() {
        let mut ctx = context();
        ctx.weather_description = Some("Cloudy".to_string());
        ctx.time_of_day = Some("evening".to_string());
        ctx.season = Some("spring".to_string());
        ctx.water_temperature_f = Some(62.0);

        let outcome = score_legacy_conditions(&legacy_fly(), &ctx, &ScoringWeights::default());
        assert_relative_eq!(outcome.delta, 120.0);
        assert!(outcome.reasons.is_empty());
    }

    #[test]
    fn test_water_out_of_range_no_penalty() {
        let mut ctx = context();
        ctx.water_temperature_f = Some(80.0);
        assert_eq!(
            score_legacy_conditions(&legacy_fly(), &ctx, &ScoringWeights::default()).delta,
            0.0
        );
    }

    #[test]
    fn test_containment_is_whole_tag() {
        let mut ctx = context();
        ctx.weather_description = Some("partly cloudy".to_string());
        assert_eq!(
            score_legacy_conditions(&legacy_fly(), &ctx, &ScoringWeights::default()).delta,
            0.0
        );
    }
}
