//! Data Loading
//!
//! Reads the fly catalog and a conditions snapshot from JSON files.
//! Catalog entries that fail to deserialize are skipped with a warning so
//! one bad entry does not block the rest of the catalog.

use crate::catalog::Candidate;
use crate::conditions::PartialConditions;
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Load a catalog from a JSON array of candidates
pub fn load_catalog(path: &Path) -> Result<Vec<Candidate>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = parse_catalog(&text)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;

    tracing::info!("Loaded {} candidates from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse catalog JSON, keeping every entry that deserializes
pub fn parse_catalog(text: &str) -> Result<Vec<Candidate>> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(text).context("Catalog must be a JSON array")?;

    let mut catalog = Vec::with_capacity(entries.len());
    let mut seen: FxHashSet<String> = FxHashSet::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Candidate>(entry) {
            Ok(candidate) => {
                if !seen.insert(candidate.id.clone()) {
                    tracing::warn!("Duplicate candidate id '{}' at entry {}", candidate.id, index);
                }
                catalog.push(candidate);
            }
            Err(e) => {
                tracing::warn!("Skipping catalog entry {}: {}", index, e);
            }
        }
    }

    Ok(catalog)
}

/// Load a conditions snapshot from a JSON object
pub fn load_conditions(path: &Path) -> Result<PartialConditions> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read conditions {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse conditions {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCategory;

    #[test]
    fn test_parse_catalog_skips_bad_entries() {
        let text = r#"[
            {"id": "adams", "name": "Parachute Adams", "type": "dry",
             "idealConditions": {"waterTemperature": {"min": 50, "max": 65}, "weatherConditions": ["overcast"]}},
            {"id": "missing-name", "type": "nymph"},
            {"id": "bugger", "name": "Woolly Bugger", "category": "streamer",
             "historicalSuccessRate": 0.7, "historicalUseCount": 42}
        ]"#;

        let catalog = parse_catalog(text).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].category, PatternCategory::Dry);
        assert_eq!(
            catalog[0].ideal_conditions.as_ref().unwrap().weather,
            vec!["overcast".to_string()]
        );
        assert_eq!(catalog[1].historical_use_count, 42);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let text = r#"[
            {"id": "a", "name": "One", "type": "wet"},
            {"id": "a", "name": "Two", "type": "wet"}
        ]"#;
        assert_eq!(parse_catalog(text).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_catalog_rejects_non_array() {
        assert!(parse_catalog(r#"{"id": "a"}"#).is_err());
    }

    #[test]
    fn test_conditions_aliases() {
        let conditions: PartialConditions = serde_json::from_str(
            r#"{"location": "Yellowstone", "coordinates": {"latitude": 44.6, "longitude": -110.5},
                "waterTemp": 52.5, "flowRate": 120, "weather": "light rain"}"#,
        )
        .unwrap();
        assert_eq!(conditions.water_temperature_f, Some(52.5));
        assert_eq!(conditions.flow_rate, Some(120.0));
        assert_eq!(conditions.weather_description.as_deref(), Some("light rain"));
    }
}
