pub mod types;
pub mod confidence;
pub mod generator;
pub mod formatters;

pub use types::{ExcludedCandidate, Recommendation, RecommendationResponse};
pub use confidence::{confidence, ConfidenceLabel};
pub use generator::{ExplanationGenerator, REASON_SEPARATOR};
pub use formatters::{JsonFormatter, MarkdownFormatter};
