//! Outing feedback - keeps a candidate's track record current
//!
//! The success rate is a running average over reported outings; R7 only
//! starts using it once the use count passes the configured minimum.

use crate::catalog::Candidate;

/// Fold one reported outing into the candidate's history
///
/// Returns the updated success rate.
pub fn record_outcome(candidate: &mut Candidate, success: bool) -> f64 {
    let count = f64::from(candidate.historical_use_count);
    let previous = if candidate.historical_success_rate.is_finite() {
        candidate.historical_success_rate.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let outcome = if success { 1.0 } else { 0.0 };

    let rate = (previous * count + outcome) / (count + 1.0);
    candidate.historical_success_rate = rate;
    candidate.historical_use_count = candidate.historical_use_count.saturating_add(1);

    tracing::debug!(
        "Recorded {} outing for '{}': rate {:.3} over {} uses",
        if success { "successful" } else { "unsuccessful" },
        candidate.id,
        rate,
        candidate.historical_use_count
    );

    rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PatternCategory;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_outing() {
        let mut fly = Candidate::new("caddis", "Elk Hair Caddis", PatternCategory::Dry);
        assert_eq!(record_outcome(&mut fly, true), 1.0);
        assert_eq!(fly.historical_use_count, 1);
    }

    #[test]
    fn test_running_average() {
        let mut fly =
            Candidate::new("caddis", "Elk Hair Caddis", PatternCategory::Dry).with_history(0.5, 10);

        let rate = record_outcome(&mut fly, false);
        assert_relative_eq!(rate, 5.0 / 11.0);
        assert_eq!(fly.historical_use_count, 11);

        let rate = record_outcome(&mut fly, true);
        assert_relative_eq!(rate, 6.0 / 12.0);
    }

    #[test]
    fn test_corrupt_rate_restarts() {
        let mut fly =
            Candidate::new("x", "X", PatternCategory::Wet).with_history(f64::NAN, 3);
        assert_relative_eq!(record_outcome(&mut fly, true), 0.25);
    }
}
