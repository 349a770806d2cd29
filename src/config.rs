//! Scoring and ranking configuration
//!
//! Every constant the rule pipeline uses lives in [`ScoringWeights`]. The
//! defaults reproduce the production scoring table; a JSON file may override
//! any subset of keys (absent keys keep their default).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-rule weights, penalties and thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Ranges whose `max` is below this value are treated as Celsius
    pub celsius_threshold: f64,

    pub ideal: IdealRangeWeights,

    /// Points per unit of boost multiplier
    pub boost_scale: f64,

    pub required_fields_bonus: f64,
    pub required_fields_penalty: f64,

    pub hatch: HatchWeights,
    pub legacy: LegacyWeights,
    pub situational: SituationalWeights,
    pub historical: HistoricalWeights,
}

/// Rule 1: ideal-range matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdealRangeWeights {
    pub water_temperature: f64,
    pub flow_rate: f64,
    pub air_temperature: f64,
    pub weather: f64,
    /// Lowest match quality awarded to an in-range value
    pub min_match_quality: f64,
    pub water_penalty_per_degree: f64,
    pub water_penalty_cap: f64,
    pub flow_penalty_per_unit: f64,
    pub flow_penalty_cap: f64,
}

/// Rule 4: matched-hatch categorical overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HatchWeights {
    pub season: f64,
    pub time_of_day: f64,
    pub water_conditions: f64,
    pub weather: f64,
}

/// Rule 5: legacy-conditions overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyWeights {
    pub weather: f64,
    pub time_of_day: f64,
    pub season: f64,
    pub water_temperature: f64,
}

/// Rule 6: category bonuses driven by flow and water temperature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SituationalWeights {
    pub low_flow_surface: f64,
    pub high_flow_streamer: f64,
    pub moderate_flow_nymph: f64,
    pub cold_water_subsurface: f64,
    pub warm_water_surface: f64,
}

/// Rule 7: historical success
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalWeights {
    /// Bonus applies only when the use count is strictly greater than this
    pub min_use_count: u32,
    pub scale: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            celsius_threshold: 30.0,
            ideal: IdealRangeWeights::default(),
            boost_scale: 10.0,
            required_fields_bonus: 15.0,
            required_fields_penalty: 20.0,
            hatch: HatchWeights::default(),
            legacy: LegacyWeights::default(),
            situational: SituationalWeights::default(),
            historical: HistoricalWeights::default(),
        }
    }
}

impl Default for IdealRangeWeights {
    fn default() -> Self {
        Self {
            water_temperature: 80.0,
            flow_rate: 70.0,
            air_temperature: 50.0,
            weather: 40.0,
            min_match_quality: 0.5,
            water_penalty_per_degree: 2.0,
            water_penalty_cap: 30.0,
            flow_penalty_per_unit: 0.5,
            flow_penalty_cap: 25.0,
        }
    }
}

impl Default for HatchWeights {
    fn default() -> Self {
        Self {
            season: 30.0,
            time_of_day: 25.0,
            water_conditions: 20.0,
            weather: 20.0,
        }
    }
}

impl Default for LegacyWeights {
    fn default() -> Self {
        Self {
            weather: 30.0,
            time_of_day: 25.0,
            season: 25.0,
            water_temperature: 40.0,
        }
    }
}

impl Default for SituationalWeights {
    fn default() -> Self {
        Self {
            low_flow_surface: 20.0,
            high_flow_streamer: 25.0,
            moderate_flow_nymph: 20.0,
            cold_water_subsurface: 15.0,
            warm_water_surface: 15.0,
        }
    }
}

impl Default for HistoricalWeights {
    fn default() -> Self {
        Self {
            min_use_count: 10,
            scale: 10.0,
        }
    }
}

impl ScoringWeights {
    /// Load weights from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring weights: {:?}", path))?;

        serde_json::from_str(&contents).with_context(|| "Failed to parse scoring weights JSON")
    }
}

/// Ranking behaviour plus the weights it scores with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of recommendations returned
    pub top_n: usize,

    /// Raw score that maps to confidence 0.0
    pub confidence_floor: f64,

    /// Raw score distance from the floor to confidence 1.0
    pub confidence_span: f64,

    /// How many leading reasons are surfaced as matching factors
    pub matching_factor_count: usize,

    /// Score candidates on the rayon pool
    pub parallel: bool,

    pub weights: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            confidence_floor: 20.0,
            confidence_span: 100.0,
            matching_factor_count: 3,
            parallel: true,
            weights: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;

        let config: EngineConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse engine config JSON")?;

        if config.confidence_span <= 0.0 {
            anyhow::bail!("confidence_span must be positive, got {}", config.confidence_span);
        }

        Ok(config)
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_defaults_match_scoring_table() {
        let w = ScoringWeights::default();
        assert_relative_eq!(w.ideal.water_temperature, 80.0);
        assert_relative_eq!(w.ideal.flow_rate, 70.0);
        assert_relative_eq!(w.ideal.air_temperature, 50.0);
        assert_relative_eq!(w.celsius_threshold, 30.0);
        assert_eq!(w.historical.min_use_count, 10);

        let cfg = EngineConfig::default();
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.matching_factor_count, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{
            "top_n": 3,
            "weights": { "ideal": { "water_temperature": 100.0 } }
        }"#;

        let cfg: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.top_n, 3);
        assert_relative_eq!(cfg.weights.ideal.water_temperature, 100.0);
        // Untouched keys fall back
        assert_relative_eq!(cfg.weights.ideal.flow_rate, 70.0);
        assert_relative_eq!(cfg.confidence_floor, 20.0);
        assert!(cfg.parallel);
    }

    #[test]
    fn test_load_weights_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "boost_scale": 12.5, "situational": {{ "high_flow_streamer": 40.0 }} }}"#
        )
        .unwrap();

        let w = ScoringWeights::load(file.path()).unwrap();
        assert_relative_eq!(w.boost_scale, 12.5);
        assert_relative_eq!(w.situational.high_flow_streamer, 40.0);
        assert_relative_eq!(w.situational.low_flow_surface, 20.0);
        assert_relative_eq!(w.ideal.water_temperature, 80.0);
    }

    #[test]
    fn test_load_weights_rejects_bad_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ScoringWeights::load(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("scoring weights"));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("engine.json"));
    }
}
