//! Fly Scorer Rust Implementation
//!
//! Ranks a catalog of fly patterns against the current fishing conditions
//! and explains each pick.
//!
//! Layout:
//! - `conditions/`: Raw snapshot, normalization and clock defaults
//! - `catalog/`: Candidate data model
//! - `matching/`: Range comparison, unit heuristic, categorical overlap
//! - `rules/`: The seven scoring rules (R1-R7)
//! - `scorer`: Folds the rules into one score per candidate
//! - `ranker`: Parallel scoring, stable ordering, top-N
//! - `explanation/`: Confidence, reasons and output formats
//! - `engine`: Public entry point
//!
//! ```no_run
//! use fly_scorer_rust::{recommend, Candidate, Coordinates, PartialConditions, PatternCategory};
//!
//! let conditions = PartialConditions {
//!     location: Some("Madison River".to_string()),
//!     coordinates: Some(Coordinates::new(45.65, -111.52)),
//!     water_temperature_f: Some(55.0),
//!     ..Default::default()
//! };
//! let catalog = vec![Candidate::new("adams", "Parachute Adams", PatternCategory::Dry)];
//! let response = recommend(&conditions, &catalog);
//! assert!(response.can_perform);
//! ```

pub mod catalog;
pub mod conditions;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod explanation;
pub mod feedback;
pub mod matching;
pub mod ranker;
pub mod rules;
pub mod scorer;

// Re-export commonly used types
pub use catalog::{Candidate, NumericRange, PatternCategory};
pub use conditions::{normalize, ConditionContext, Coordinates, PartialConditions};
pub use config::{EngineConfig, ScoringWeights};
pub use engine::{recommend, RecommendationEngine};
pub use error::{EngineError, ScoreError};
pub use explanation::{Recommendation, RecommendationResponse};
pub use feedback::record_outcome;
pub use ranker::{rank, Ranking};
pub use scorer::{score_candidate, CandidateScore, CandidateScorer, RuleScorer};
