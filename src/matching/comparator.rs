//! Range Comparator
//!
//! Compares a context reading against a candidate's ideal `[min, max]` range.
//! In-range readings get a match quality that rewards sitting near the
//! midpoint; out-of-range readings report their distance past the nearest
//! bound so the caller can size a penalty.

use crate::catalog::NumericRange;

/// Where a reading sits relative to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// value < min
    BelowRange,

    /// min <= value <= max
    WithinRange,

    /// value > max
    AboveRange,
}

impl RangeFit {
    pub fn display_text(&self) -> &'static str {
        match self {
            RangeFit::BelowRange => "below ideal range",
            RangeFit::WithinRange => "within ideal range",
            RangeFit::AboveRange => "above ideal range",
        }
    }
}

/// Result of comparing one reading to one range
#[derive(Debug, Clone, Copy)]
pub struct RangeComparison {
    pub fit: RangeFit,

    /// Reading being compared
    pub value: f64,

    /// Range after unit normalization
    pub range: NumericRange,

    /// Distance past the nearest bound (0 when within range)
    pub distance_from_range: f64,

    /// Centrality in [min_quality, 1.0] when within range, 0 otherwise
    pub match_quality: f64,
}

impl RangeComparison {
    pub fn is_within_range(&self) -> bool {
        self.fit == RangeFit::WithinRange
    }

    /// Capped linear penalty for an out-of-range reading
    pub fn penalty(&self, per_unit: f64, cap: f64) -> f64 {
        (self.distance_from_range * per_unit).min(cap)
    }

    /// E.g. "Water temp 58.0°F within ideal range (45.0-65.0°F)"
    pub fn format_with_context(&self, label: &str, unit: &str) -> String {
        format!(
            "{} {:.1}{} {} ({:.1}-{:.1}{})",
            label,
            self.value,
            unit,
            self.fit.display_text(),
            self.range.min,
            self.range.max,
            unit
        )
    }
}

/// How centrally `value` sits in `range`
///
/// `max(min_quality, 1 - |value - midpoint| / (width / 2))`. The midpoint
/// scores exactly 1.0 and the bounds score `min_quality`. A zero-width range
/// that contains the value is a perfect match.
pub fn match_quality(value: f64, range: &NumericRange, min_quality: f64) -> f64 {
    let half_width = range.width() / 2.0;
    if half_width <= 0.0 {
        return 1.0;
    }

    let offset = (value - range.midpoint()).abs() / half_width;
    (1.0 - offset).max(min_quality)
}

/// Compare a reading against a (unit-normalized) range
pub fn compare_to_range(value: f64, range: NumericRange, min_quality: f64) -> RangeComparison {
    let (fit, distance) = if range.contains(value) {
        (RangeFit::WithinRange, 0.0)
    } else if value < range.min {
        (RangeFit::BelowRange, range.min - value)
    } else {
        (RangeFit::AboveRange, value - range.max)
    };

    let match_quality = match fit {
        RangeFit::WithinRange => match_quality(value, &range, min_quality),
        _ => 0.0,
    };

    RangeComparison {
        fit,
        value,
        range,
        distance_from_range: distance,
        match_quality,
    }
}
