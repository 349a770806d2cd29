//! Temperature unit reconciliation for catalog ranges
//!
//! Catalog temperature ranges were authored in both units without a unit tag.
//! A range whose `max` is below the Celsius threshold (30 by default) is read
//! as Celsius and converted; anything else is already Fahrenheit. Catalog data
//! relies on this exact cut-off, so it must not be "corrected".

use crate::catalog::NumericRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Unit a range was authored in
pub fn authored_unit(range: &NumericRange, celsius_threshold: f64) -> TemperatureUnit {
    if range.max < celsius_threshold {
        TemperatureUnit::Celsius
    } else {
        TemperatureUnit::Fahrenheit
    }
}

/// Range expressed in Fahrenheit
pub fn to_fahrenheit(range: &NumericRange, celsius_threshold: f64) -> NumericRange {
    match authored_unit(range, celsius_threshold) {
        TemperatureUnit::Celsius => NumericRange::new(
            celsius_to_fahrenheit(range.min),
            celsius_to_fahrenheit(range.max),
        ),
        TemperatureUnit::Fahrenheit => *range,
    }
}
