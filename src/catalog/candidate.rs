//! Catalog entry types
//!
//! A candidate fly pattern carries several overlapping descriptions of the
//! conditions it fishes best in. Each optional block feeds one scoring rule;
//! a candidate with none of them still ranks (at the score floor).
//!
//! JSON keys are camelCase to match the catalog documents.

use crate::conditions::ContextField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive numeric range `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Coarse pattern type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternCategory {
    /// Floats in the surface film
    Dry,
    /// Hoppers, ants, beetles
    Terrestrial,
    Emerger,
    /// Swung soft hackles and wets
    Wet,
    /// Fished subsurface near the bottom
    Nymph,
    /// Baitfish imitations fished deep and fast
    Streamer,
    Other(String),
}

impl PatternCategory {
    /// Floating / terrestrial-style patterns
    pub fn is_surface(&self) -> bool {
        matches!(self, PatternCategory::Dry | PatternCategory::Terrestrial)
    }

    /// Deep / streamer-style patterns
    pub fn is_streamer(&self) -> bool {
        matches!(self, PatternCategory::Streamer)
    }

    /// Subsurface / nymph-style patterns
    pub fn is_subsurface(&self) -> bool {
        matches!(self, PatternCategory::Nymph)
    }

    pub fn as_str(&self) -> &str {
        match self {
            PatternCategory::Dry => "dry",
            PatternCategory::Terrestrial => "terrestrial",
            PatternCategory::Emerger => "emerger",
            PatternCategory::Wet => "wet",
            PatternCategory::Nymph => "nymph",
            PatternCategory::Streamer => "streamer",
            PatternCategory::Other(tag) => tag,
        }
    }
}

impl From<String> for PatternCategory {
    fn from(tag: String) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "dry" | "dry fly" | "dry_fly" | "surface" => PatternCategory::Dry,
            "terrestrial" => PatternCategory::Terrestrial,
            "emerger" => PatternCategory::Emerger,
            "wet" | "wet fly" | "wet_fly" | "soft hackle" => PatternCategory::Wet,
            "nymph" | "subsurface" => PatternCategory::Nymph,
            "streamer" => PatternCategory::Streamer,
            _ => PatternCategory::Other(tag),
        }
    }
}

impl From<PatternCategory> for String {
    fn from(category: PatternCategory) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named numeric ranges plus acceptable weather descriptions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IdealConditions {
    /// °F, or °C when `max` is below the Celsius threshold
    pub water_temperature: Option<NumericRange>,
    /// Same unit convention as water temperature
    pub air_temperature: Option<NumericRange>,
    /// cfs, never converted
    pub flow_rate: Option<NumericRange>,
    /// Substrings matched against the weather description
    #[serde(alias = "weatherConditions")]
    pub weather: Vec<String>,
}

/// The natural event (hatch) a pattern imitates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchedHatch {
    #[serde(alias = "seasons")]
    pub season: Vec<String>,
    #[serde(alias = "timesOfDay")]
    pub time_of_day: Vec<String>,
    pub water_conditions: Vec<String>,
    #[serde(alias = "weather")]
    pub weather_conditions: Vec<String>,
    /// Size / colour descriptor, informational only
    pub primary_size: Option<String>,
}

/// Boost comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = ">=")]
    AtLeast,
    #[serde(rename = "<=")]
    AtMost,
    #[serde(rename = "==")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
}

impl Comparator {
    pub fn evaluate(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparator::AtLeast => value >= threshold,
            Comparator::AtMost => value <= threshold,
            Comparator::Equal => value == threshold,
            Comparator::NotEqual => value != threshold,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::AtLeast => ">=",
            Comparator::AtMost => "<=",
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
        }
    }
}

impl FromStr for Comparator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            ">=" => Ok(Comparator::AtLeast),
            "<=" => Ok(Comparator::AtMost),
            "==" => Ok(Comparator::Equal),
            "!=" => Ok(Comparator::NotEqual),
            other => Err(format!("unsupported comparator '{}'", other)),
        }
    }
}

/// Conditional bonus applied when a context reading satisfies a comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boost {
    pub name: String,
    pub multiplier: f64,
    /// Context field name, e.g. "flowRate"
    pub field: String,
    pub operator: Comparator,
    pub value: f64,
}

impl Boost {
    /// Numeric context field the boost compares, if the name is known
    pub fn target(&self) -> Option<ContextField> {
        self.field
            .parse::<ContextField>()
            .ok()
            .filter(ContextField::is_numeric)
    }
}

/// Curated scoring hints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringProfile {
    /// Informational tag, e.g. "hatch-match" or "attractor"
    pub match_strategy: Option<String>,
    pub boosts: Vec<Boost>,
    pub required_fields: Vec<String>,
}

/// Older catalog format, kept for entries not yet migrated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyConditions {
    pub weather: Vec<String>,
    pub time_of_day: Vec<String>,
    pub season: Vec<String>,
    #[serde(alias = "waterTemperature")]
    pub water_temp: Option<NumericRange>,
}

/// Catalog entry scored against current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    #[serde(alias = "type")]
    pub category: PatternCategory,

    #[serde(default)]
    pub ideal_conditions: Option<IdealConditions>,
    #[serde(default, alias = "matchedPhenomenon")]
    pub matched_hatch: Option<MatchedHatch>,
    #[serde(default)]
    pub scoring_profile: Option<ScoringProfile>,
    #[serde(default, alias = "conditions")]
    pub legacy_conditions: Option<LegacyConditions>,

    /// Fraction of reported outings that were successful, in [0, 1]
    #[serde(default)]
    pub historical_success_rate: f64,
    #[serde(default)]
    pub historical_use_count: u32,
}

impl Candidate {
    /// Bare candidate with no condition data
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: PatternCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            ideal_conditions: None,
            matched_hatch: None,
            scoring_profile: None,
            legacy_conditions: None,
            historical_success_rate: 0.0,
            historical_use_count: 0,
        }
    }

    pub fn with_ideal_conditions(mut self, ideal: IdealConditions) -> Self {
        self.ideal_conditions = Some(ideal);
        self
    }

    pub fn with_matched_hatch(mut self, hatch: MatchedHatch) -> Self {
        self.matched_hatch = Some(hatch);
        self
    }

    pub fn with_scoring_profile(mut self, profile: ScoringProfile) -> Self {
        self.scoring_profile = Some(profile);
        self
    }

    pub fn with_legacy_conditions(mut self, legacy: LegacyConditions) -> Self {
        self.legacy_conditions = Some(legacy);
        self
    }

    pub fn with_history(mut self, success_rate: f64, use_count: u32) -> Self {
        self.historical_success_rate = success_rate;
        self.historical_use_count = use_count;
        self
    }
}
