//! RULE 6: CATEGORY SITUATIONAL BONUS
//!
//! Rules of thumb keyed on pattern category and a single reading:
//!
//! | reading              | category            | bonus |
//! |----------------------|---------------------|-------|
//! | flow < 50 cfs        | dry / terrestrial   | +20   |
//! | flow > 200 cfs       | streamer            | +25   |
//! | 75 ≤ flow ≤ 150 cfs  | nymph               | +20   |
//! | water < 45°F         | nymph               | +15   |
//! | water > 65°F         | dry / terrestrial   | +15   |

use super::RuleOutcome;
use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;

pub const LOW_FLOW_CFS: f64 = 50.0;
pub const HIGH_FLOW_CFS: f64 = 200.0;
pub const NYMPH_FLOW_CFS: (f64, f64) = (75.0, 150.0);
pub const COLD_WATER_F: f64 = 45.0;
pub const WARM_WATER_F: f64 = 65.0;

pub fn score_situational(
    candidate: &Candidate,
    ctx: &ConditionContext,
    weights: &ScoringWeights,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::none();
    let category = &candidate.category;
    let w = &weights.situational;

    if let Some(flow) = ctx.flow_rate {
        if flow < LOW_FLOW_CFS && category.is_surface() {
            outcome.add_with_reason(
                w.low_flow_surface,
                format!("Low flow ({:.0} cfs) favors surface patterns", flow),
            );
        } else if flow > HIGH_FLOW_CFS && category.is_streamer() {
            outcome.add_with_reason(
                w.high_flow_streamer,
                format!("High flow ({:.0} cfs) favors streamers", flow),
            );
        } else if (NYMPH_FLOW_CFS.0..=NYMPH_FLOW_CFS.1).contains(&flow) && category.is_subsurface()
        {
            outcome.add_with_reason(
                w.moderate_flow_nymph,
                format!("Moderate flow ({:.0} cfs) is ideal for nymphing", flow),
            );
        }
    }

    if let Some(water) = ctx.water_temperature_f {
        if water < COLD_WATER_F && category.is_subsurface() {
            outcome.add_with_reason(
                w.cold_water_subsurface,
                format!("Cold water ({:.1}°F) keeps fish feeding deep", water),
            );
        } else if water > WARM_WATER_F && category.is_surface() {
            outcome.add_with_reason(
                w.warm_water_surface,
                format!("Warm water ({:.1}°F) brings fish to the surface", water),
            );
        }
    }

    outcome
}
