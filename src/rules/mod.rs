//! Scoring rules
//!
//! Each rule is a pure function of (candidate, context, weights) returning a
//! point delta plus the reasons it wants shown. The scorer folds the seven
//! outcomes in order; order only affects reason ordering since deltas add.

pub mod r1_ideal_ranges;
pub mod r2_profile_boosts;
pub mod r3_required_fields;
pub mod r4_hatch_overlap;
pub mod r5_legacy_conditions;
pub mod r6_situational;
pub mod r7_historical_success;

pub use r1_ideal_ranges::score_ideal_ranges;
pub use r2_profile_boosts::score_profile_boosts;
pub use r3_required_fields::score_required_fields;
pub use r4_hatch_overlap::score_hatch_overlap;
pub use r5_legacy_conditions::score_legacy_conditions;
pub use r6_situational::score_situational;
pub use r7_historical_success::score_historical_success;

use crate::catalog::Candidate;
use crate::conditions::ConditionContext;
use crate::config::ScoringWeights;
use serde::Serialize;
use smallvec::SmallVec;

/// Reasons a single rule emits (rarely more than three)
pub type Reasons = SmallVec<[String; 4]>;

/// Contribution of one rule to a candidate's score
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    pub delta: f64,
    pub reasons: Reasons,
}

impl RuleOutcome {
    pub fn none() -> Self {
        Self::default()
    }

    /// Add points without a reason
    pub fn add(&mut self, points: f64) {
        self.delta += points;
    }

    /// Add points and the reason explaining them
    pub fn add_with_reason(&mut self, points: f64, reason: String) {
        self.delta += points;
        self.reasons.push(reason);
    }
}

/// Rule identity, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    IdealRanges,
    ProfileBoosts,
    RequiredFields,
    HatchOverlap,
    LegacyConditions,
    Situational,
    HistoricalSuccess,
}

impl RuleKind {
    pub fn code(&self) -> &'static str {
        match self {
            RuleKind::IdealRanges => "R1",
            RuleKind::ProfileBoosts => "R2",
            RuleKind::RequiredFields => "R3",
            RuleKind::HatchOverlap => "R4",
            RuleKind::LegacyConditions => "R5",
            RuleKind::Situational => "R6",
            RuleKind::HistoricalSuccess => "R7",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RuleKind::IdealRanges => "Ideal conditions",
            RuleKind::ProfileBoosts => "Profile boosts",
            RuleKind::RequiredFields => "Required data",
            RuleKind::HatchOverlap => "Hatch match",
            RuleKind::LegacyConditions => "Legacy conditions",
            RuleKind::Situational => "Situational",
            RuleKind::HistoricalSuccess => "Track record",
        }
    }
}

pub type RuleFn = fn(&Candidate, &ConditionContext, &ScoringWeights) -> RuleOutcome;

pub const RULE_COUNT: usize = 7;

/// The scoring pipeline, in evaluation order
pub const RULE_PIPELINE: [(RuleKind, RuleFn); RULE_COUNT] = [
    (RuleKind::IdealRanges, score_ideal_ranges),
    (RuleKind::ProfileBoosts, score_profile_boosts),
    (RuleKind::RequiredFields, score_required_fields),
    (RuleKind::HatchOverlap, score_hatch_overlap),
    (RuleKind::LegacyConditions, score_legacy_conditions),
    (RuleKind::Situational, score_situational),
    (RuleKind::HistoricalSuccess, score_historical_success),
];
