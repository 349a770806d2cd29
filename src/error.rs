//! Engine error types
//!
//! Two kinds of failure reach the caller: the request could not be performed
//! at all (`EngineError`), or a single candidate could not be scored
//! (`ScoreError`). The latter never aborts a ranking; the candidate is dropped.

use thiserror::Error;

/// Guidance shown when the caller has not chosen a place to fish yet
pub const INSUFFICIENT_CONTEXT_MESSAGE: &str =
    "Location data is missing - select a location first to get fly recommendations";

/// Guidance shown when there is nothing to rank
pub const EMPTY_CATALOG_MESSAGE: &str =
    "No flies available in the catalog - add patterns before requesting recommendations";

/// Reasons the engine refuses to run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// `location` and/or `coordinates` were not supplied
    #[error("{}", INSUFFICIENT_CONTEXT_MESSAGE)]
    InsufficientContext,

    /// The candidate list was empty
    #[error("{}", EMPTY_CATALOG_MESSAGE)]
    EmptyCatalog,
}

/// A candidate carries data the scorer cannot evaluate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("candidate '{candidate}': {field} range has a non-finite bound")]
    NonFiniteRange { candidate: String, field: &'static str },

    #[error("candidate '{candidate}': {field} range is inverted (min {min} > max {max})")]
    InvertedRange {
        candidate: String,
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("candidate '{candidate}': boost '{boost}' has a non-finite multiplier or threshold")]
    NonFiniteBoost { candidate: String, boost: String },

    #[error("candidate '{candidate}': historical success rate {rate} is not a finite number")]
    InvalidSuccessRate { candidate: String, rate: f64 },

    #[error("candidate '{candidate}': scorer panicked: {message}")]
    ScorerPanicked { candidate: String, message: String },
}
