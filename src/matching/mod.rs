//! Matching primitives shared by the scoring rules
//!
//! - `units.rs` - Celsius/Fahrenheit reconciliation of catalog ranges
//! - `comparator.rs` - range fit, match quality, out-of-range distance
//! - `categorical.rs` - case-insensitive tag overlap

pub mod units;
pub mod comparator;
pub mod categorical;

pub use units::{celsius_to_fahrenheit, to_fahrenheit, TemperatureUnit};
pub use comparator::{compare_to_range, match_quality, RangeComparison, RangeFit};
pub use categorical::{any_contains, contains_tag, overlaps_any};
