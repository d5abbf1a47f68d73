//! Time period — coarse segment of the day that gates lighting behaviour.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// One of the four segments a day is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimePeriod {
    /// Map an hour of the day to its period.
    ///
    /// Hours are half-open buckets: `[0, 6)` night, `[6, 12)` morning,
    /// `[12, 18)` afternoon. Anything else is evening, including values
    /// past 23.
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..6 => Self::Night,
            6..12 => Self::Morning,
            12..18 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Classify a point in time. Only the hour component is consulted.
    #[must_use]
    pub fn classify<T: Timelike>(time: &T) -> Self {
        Self::from_hour(time.hour())
    }

    /// Whether motion in this period should switch the light on.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }

    /// Whether the light should be kept off during this period.
    #[must_use]
    pub fn is_daylight(self) -> bool {
        matches!(self, Self::Morning | Self::Afternoon)
    }
}

impl std::fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Morning => f.write_str("morning"),
            Self::Afternoon => f.write_str("afternoon"),
            Self::Evening => f.write_str("evening"),
            Self::Night => f.write_str("night"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn should_map_boundary_hours_to_their_period() {
        assert_eq!(TimePeriod::from_hour(0), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(6), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(12), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(18), TimePeriod::Evening);
    }

    #[test]
    fn should_map_last_hour_of_each_bucket_to_that_bucket() {
        assert_eq!(TimePeriod::from_hour(5), TimePeriod::Night);
        assert_eq!(TimePeriod::from_hour(11), TimePeriod::Morning);
        assert_eq!(TimePeriod::from_hour(17), TimePeriod::Afternoon);
        assert_eq!(TimePeriod::from_hour(23), TimePeriod::Evening);
    }

    #[test]
    fn should_partition_the_day_into_four_contiguous_blocks() {
        let periods: Vec<_> = (0..24).map(TimePeriod::from_hour).collect();
        let count = |p| periods.iter().filter(|&&x| x == p).count();
        assert_eq!(count(TimePeriod::Night), 6);
        assert_eq!(count(TimePeriod::Morning), 6);
        assert_eq!(count(TimePeriod::Afternoon), 6);
        assert_eq!(count(TimePeriod::Evening), 6);
        assert!(periods[0..6].iter().all(|p| *p == TimePeriod::Night));
        assert!(periods[18..24].iter().all(|p| *p == TimePeriod::Evening));
    }

    #[test]
    fn should_fall_back_to_evening_when_hour_is_out_of_range() {
        assert_eq!(TimePeriod::from_hour(24), TimePeriod::Evening);
        assert_eq!(TimePeriod::from_hour(u32::MAX), TimePeriod::Evening);
    }

    #[test]
    fn should_ignore_minutes_and_seconds_when_classifying() {
        let almost_noon = NaiveTime::from_hms_opt(11, 59, 59).unwrap();
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(TimePeriod::classify(&almost_noon), TimePeriod::Morning);
        assert_eq!(TimePeriod::classify(&noon), TimePeriod::Afternoon);
    }

    #[test]
    fn should_report_evening_and_night_as_dark() {
        assert!(TimePeriod::Evening.is_dark());
        assert!(TimePeriod::Night.is_dark());
        assert!(!TimePeriod::Morning.is_dark());
        assert!(!TimePeriod::Afternoon.is_dark());
    }

    #[test]
    fn should_treat_dark_and_daylight_as_complements() {
        for hour in 0..24 {
            let period = TimePeriod::from_hour(hour);
            assert_ne!(period.is_dark(), period.is_daylight());
        }
    }

    #[test]
    fn should_display_lowercase_variant_name() {
        assert_eq!(TimePeriod::Afternoon.to_string(), "afternoon");
        assert_eq!(TimePeriod::Night.to_string(), "night");
    }

    #[test]
    fn should_serialize_as_lowercase_string() {
        let json = serde_json::to_string(&TimePeriod::Evening).unwrap();
        assert_eq!(json, "\"evening\"");
        let parsed: TimePeriod = serde_json::from_str("\"morning\"").unwrap();
        assert_eq!(parsed, TimePeriod::Morning);
    }
}
