//! Clock-derived season and time-of-day tags
//!
//! Callers that have no explicit season/time-of-day selection fill them from
//! the local clock before normalizing. Seasons are meteorological
//! (Northern hemisphere); time-of-day buckets follow the hatch windows anglers
//! use.

use super::context::PartialConditions;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// Season tag for a month number (1-12)
pub fn season_for_month(month: u32) -> &'static str {
    match month {
        3..=5 => "spring",
        6..=8 => "summer",
        9..=11 => "fall",
        _ => "winter",
    }
}

/// Time-of-day tag for an hour (0-23)
pub fn time_of_day_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=6 => "dawn",
        7..=10 => "morning",
        11..=13 => "midday",
        14..=16 => "afternoon",
        17..=19 => "evening",
        _ => "night",
    }
}

impl PartialConditions {
    /// Fill `season` and `time_of_day` from a local timestamp
    ///
    /// Values the caller already supplied are kept.
    pub fn with_clock_defaults(mut self, now: NaiveDateTime) -> Self {
        if self.season.is_none() {
            self.season = Some(season_for_month(now.month()).to_string());
        }
        if self.time_of_day.is_none() {
            self.time_of_day = Some(time_of_day_for_hour(now.hour()).to_string());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(month: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, month, 15)
            .unwrap()
            .and_hms_opt(hour, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_season_boundaries() {
        assert_eq!(season_for_month(12), "winter");
        assert_eq!(season_for_month(2), "winter");
        assert_eq!(season_for_month(3), "spring");
        assert_eq!(season_for_month(8), "summer");
        assert_eq!(season_for_month(11), "fall");
    }

    #[test]
    fn test_time_of_day_buckets() {
        assert_eq!(time_of_day_for_hour(4), "night");
        assert_eq!(time_of_day_for_hour(6), "dawn");
        assert_eq!(time_of_day_for_hour(9), "morning");
        assert_eq!(time_of_day_for_hour(12), "midday");
        assert_eq!(time_of_day_for_hour(15), "afternoon");
        assert_eq!(time_of_day_for_hour(18), "evening");
        assert_eq!(time_of_day_for_hour(22), "night");
    }

    #[test]
    fn test_clock_defaults_do_not_override_caller() {
        let partial = PartialConditions {
            season: Some("spring".to_string()),
            ..Default::default()
        }
        .with_clock_defaults(at(7, 18));

        assert_eq!(partial.season.as_deref(), Some("spring"));
        assert_eq!(partial.time_of_day.as_deref(), Some("evening"));
    }
}
