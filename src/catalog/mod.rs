//! Fly pattern catalog
//!
//! Read-only to the engine. Entries arrive from the catalog provider as a
//! snapshot; `feedback.rs` is the only code that writes to them.

pub mod candidate;

pub use candidate::{
    Boost, Candidate, Comparator, IdealConditions, LegacyConditions, MatchedHatch, NumericRange,
    PatternCategory, ScoringProfile,
};
