//! Confidence normalization
//!
//! Raw scores are additive and unbounded. Users see a [0, 1] confidence:
//! `clamp01((score - 20) / 100)` rounded to two decimals, so anything at or
//! below 20 reads 0.00 and anything at or above 120 reads 1.00.

use serde::{Deserialize, Serialize};

/// Map a raw score onto [0, 1], rounded to two decimals
pub fn confidence(score: f64, floor: f64, span: f64) -> f64 {
    let unit = ((score - floor) / span).clamp(0.0, 1.0);
    if unit.is_nan() {
        return 0.0;
    }
    (unit * 100.0).round() / 100.0
}

/// Coarse confidence band for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceLabel {
    Speculative,
    Low,
    Moderate,
    High,
}

impl ConfidenceLabel {
    pub fn from_confidence(confidence: f64) -> Self {
        match confidence {
            c if c >= 0.75 => ConfidenceLabel::High,
            c if c >= 0.5 => ConfidenceLabel::Moderate,
            c if c >= 0.25 => ConfidenceLabel::Low,
            _ => ConfidenceLabel::Speculative,
        }
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            ConfidenceLabel::High => "High",
            ConfidenceLabel::Moderate => "Moderate",
            ConfidenceLabel::Low => "Low",
            ConfidenceLabel::Speculative => "Speculative",
        }
    }

    /// "★★★☆"
    pub fn stars(&self) -> &'static str {
        match self {
            ConfidenceLabel::High => "★★★★",
            ConfidenceLabel::Moderate => "★★★☆",
            ConfidenceLabel::Low => "★★☆☆",
            ConfidenceLabel::Speculative => "★☆☆☆",
        }
    }
}
