//! Environmental conditions
//!
//! - `context.rs` - raw snapshot, canonical context, normalizer
//! - `calendar.rs` - season / time-of-day tags from the clock

pub mod context;
pub mod calendar;

pub use context::{
    normalize, ConditionContext, ContextAssessment, ContextField, Coordinates, PartialConditions,
};
pub use calendar::{season_for_month, time_of_day_for_hour};
