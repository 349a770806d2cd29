use crate::explanation::types::RecommendationResponse;

/// JSON formatter for recommendation responses
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format response as pretty-printed JSON
    pub fn format(response: &RecommendationResponse) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(response)
    }

    /// Format response as compact JSON (no whitespace)
    pub fn format_compact(response: &RecommendationResponse) -> Result<String, serde_json::Error> {
        serde_json::to_string(response)
    }
}
