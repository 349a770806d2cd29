use serde::Serialize;
use crate::catalog::Candidate;
use crate::explanation::confidence::ConfidenceLabel;
use crate::scorer::ScoreBreakdown;

/// One ranked, explained recommendation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub fly: Candidate,
    pub score: f64,              // Raw additive score (≥ 0)
    pub confidence: f64,         // [0, 1], two decimals
    pub confidence_label: ConfidenceLabel,
    pub reason: String,          // All reasons joined with ". "
    pub matching_factors: Vec<String>, // First three reasons
    pub breakdown: ScoreBreakdown,
}

/// A candidate dropped because its data could not be scored
#[derive(Debug, Clone, Serialize)]
pub struct ExcludedCandidate {
    pub id: String,
    pub error: String,
}

/// Engine output in the shape the caller reports upstream
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub results: Vec<Recommendation>,
    pub can_perform: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<ExcludedCandidate>,
}

impl RecommendationResponse {
    /// Response for a request the engine refused
    pub fn cannot_perform(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            can_perform: false,
            error: Some(message.into()),
            excluded: Vec::new(),
        }
    }
}
