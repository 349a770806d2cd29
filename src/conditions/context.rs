//! Condition context and its normalizer
//!
//! `PartialConditions` is whatever the environmental providers managed to
//! assemble. `normalize` checks that a location was chosen and produces the
//! `ConditionContext` the scorer consumes. Numeric fields pass through
//! unchanged; unit reconciliation happens on the candidate side.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    fn is_usable(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// Raw environmental snapshot, every field optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialConditions {
    pub location: Option<String>,
    pub coordinates: Option<Coordinates>,

    // ========================================================================
    // Numeric readings
    // ========================================================================
    #[serde(alias = "waterTemperature", alias = "waterTemp")]
    pub water_temperature_f: Option<f64>,

    #[serde(alias = "airTemperature", alias = "airTemp")]
    pub air_temperature_f: Option<f64>,

    /// Volumetric flow (cfs)
    pub flow_rate: Option<f64>,

    // ========================================================================
    // Categorical tags
    // ========================================================================
    #[serde(alias = "weather")]
    pub weather_description: Option<String>,

    /// Coarse water state, e.g. "clear", "stained", "high"
    pub water_flow_qualitative: Option<String>,

    /// Coarse weather, e.g. "overcast", "sunny"
    pub weather_qualitative: Option<String>,

    pub season: Option<String>,
    pub time_of_day: Option<String>,
}

/// Canonical context the scorer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionContext {
    pub location: String,
    pub coordinates: Coordinates,
    pub water_temperature_f: Option<f64>,
    pub air_temperature_f: Option<f64>,
    pub flow_rate: Option<f64>,
    pub weather_description: Option<String>,
    pub water_flow_qualitative: Option<String>,
    pub weather_qualitative: Option<String>,
    pub season: Option<String>,
    pub time_of_day: Option<String>,
}

/// Context fields a candidate may refer to by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextField {
    Location,
    Coordinates,
    WaterTemperature,
    AirTemperature,
    FlowRate,
    WeatherDescription,
    WaterFlowQualitative,
    WeatherQualitative,
    Season,
    TimeOfDay,
}

impl ContextField {
    /// Whether the field holds a number a boost can compare against
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ContextField::WaterTemperature | ContextField::AirTemperature | ContextField::FlowRate
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContextField::Location => "location",
            ContextField::Coordinates => "coordinates",
            ContextField::WaterTemperature => "water temperature",
            ContextField::AirTemperature => "air temperature",
            ContextField::FlowRate => "flow rate",
            ContextField::WeatherDescription => "weather",
            ContextField::WaterFlowQualitative => "water conditions",
            ContextField::WeatherQualitative => "weather conditions",
            ContextField::Season => "season",
            ContextField::TimeOfDay => "time of day",
        }
    }
}

impl FromStr for ContextField {
    type Err = String;

    /// Accepts the catalog's camelCase names plus the snake_case and short
    /// spellings found in older documents
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "location" => Ok(ContextField::Location),
            "coordinates" | "coords" => Ok(ContextField::Coordinates),
            "watertemperature" | "watertemperaturef" | "watertemp" => {
                Ok(ContextField::WaterTemperature)
            }
            "airtemperature" | "airtemperaturef" | "airtemp" => Ok(ContextField::AirTemperature),
            "flowrate" | "flow" | "cfs" => Ok(ContextField::FlowRate),
            "weatherdescription" | "weather" => Ok(ContextField::WeatherDescription),
            "waterflowqualitative" | "waterconditions" | "waterflow" => {
                Ok(ContextField::WaterFlowQualitative)
            }
            "weatherqualitative" | "weatherconditions" => Ok(ContextField::WeatherQualitative),
            "season" => Ok(ContextField::Season),
            "timeofday" => Ok(ContextField::TimeOfDay),
            _ => Err(format!("unknown context field '{}'", s)),
        }
    }
}

impl ConditionContext {
    /// Minimal context at a location with no readings
    pub fn at(location: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            location: location.into(),
            coordinates,
            water_temperature_f: None,
            air_temperature_f: None,
            flow_rate: None,
            weather_description: None,
            water_flow_qualitative: None,
            weather_qualitative: None,
            season: None,
            time_of_day: None,
        }
    }

    /// Numeric reading for a field, if the field is numeric and present
    pub fn numeric(&self, field: ContextField) -> Option<f64> {
        match field {
            ContextField::WaterTemperature => self.water_temperature_f,
            ContextField::AirTemperature => self.air_temperature_f,
            ContextField::FlowRate => self.flow_rate,
            _ => None,
        }
    }

    /// Whether a field carries a value
    pub fn has_field(&self, field: ContextField) -> bool {
        match field {
            ContextField::Location | ContextField::Coordinates => true,
            ContextField::WaterTemperature
            | ContextField::AirTemperature
            | ContextField::FlowRate => self.numeric(field).is_some(),
            ContextField::WeatherDescription => present(&self.weather_description),
            ContextField::WaterFlowQualitative => present(&self.water_flow_qualitative),
            ContextField::WeatherQualitative => present(&self.weather_qualitative),
            ContextField::Season => present(&self.season),
            ContextField::TimeOfDay => present(&self.time_of_day),
        }
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn finite(reading: Option<f64>) -> Option<f64> {
    reading.filter(|v| v.is_finite())
}

/// Validate a raw snapshot and shape it into a scoring context
///
/// Fails only when no location was chosen. Missing optional readings are
/// carried as `None`; so are non-finite ones.
pub fn normalize(partial: &PartialConditions) -> Result<ConditionContext, EngineError> {
    let location = partial
        .location
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(EngineError::InsufficientContext)?;

    let coordinates = partial
        .coordinates
        .filter(Coordinates::is_usable)
        .ok_or(EngineError::InsufficientContext)?;

    Ok(ConditionContext {
        location: location.to_string(),
        coordinates,
        water_temperature_f: finite(partial.water_temperature_f),
        air_temperature_f: finite(partial.air_temperature_f),
        flow_rate: finite(partial.flow_rate),
        weather_description: partial.weather_description.clone(),
        water_flow_qualitative: partial.water_flow_qualitative.clone(),
        weather_qualitative: partial.weather_qualitative.clone(),
        season: partial.season.clone(),
        time_of_day: partial.time_of_day.clone(),
    })
}

/// Outcome of normalization in the shape callers report upstream
#[derive(Debug, Clone)]
pub struct ContextAssessment {
    pub can_perform: bool,
    pub reason: Option<String>,
    pub context: Option<ConditionContext>,
}

impl ContextAssessment {
    pub fn of(partial: &PartialConditions) -> Self {
        match normalize(partial) {
            Ok(context) => Self {
                can_perform: true,
                reason: None,
                context: Some(context),
            },
            Err(err) => Self {
                can_perform: false,
                reason: Some(err.to_string()),
                context: None,
            },
        }
    }
}
