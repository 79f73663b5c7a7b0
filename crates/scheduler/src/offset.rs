//! Time difference and travel direction at the departure instant.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::zones::offset_seconds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Eastward,
    Westward,
    /// Zero or negligible difference.
    None,
}

/// Signed destination-minus-origin offset.  Not wrapped into ±12h:
/// Tokyo to Los Angeles in June is -16, not +8.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDifference {
    pub hours: f64,
    pub direction: Direction,
}

impl TimeDifference {
    /// Offsets of both zones as they stand at `instant`.
    pub fn at(origin: Tz, dest: Tz, instant: DateTime<Utc>, negligible_below: f64) -> Self {
        let origin_secs = offset_seconds(&instant.with_timezone(&origin));
        let dest_secs = offset_seconds(&instant.with_timezone(&dest));
        Self::from_hours(f64::from(dest_secs - origin_secs) / 3600.0, negligible_below)
    }

    pub fn from_hours(hours: f64, negligible_below: f64) -> Self {
        let direction = if hours == 0.0 || hours.abs() < negligible_below {
            Direction::None
        } else if hours > 0.0 {
            Direction::Eastward
        } else {
            Direction::Westward
        };
        Self { hours, direction }
    }

    pub fn magnitude(&self) -> f64 {
        self.hours.abs()
    }

    /// True iff the destination clock is ahead, however slightly.
    pub fn is_eastward(&self) -> bool {
        self.hours > 0.0
    }

    /// No shift schedule is worth generating.
    pub fn is_negligible(&self) -> bool {
        self.direction == Direction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::{America, Asia, Europe};

    fn at(y: i32, m: u32, d: u32, origin: Tz, dest: Tz) -> TimeDifference {
        let instant = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        TimeDifference::at(origin, dest, instant, 0.5)
    }

    #[test]
    fn new_york_to_london_tracks_both_dst_calendars() {
        assert_eq!(at(2024, 12, 15, America::New_York, Europe::London).hours, 5.0);
        assert_eq!(at(2024, 7, 1, America::New_York, Europe::London).hours, 5.0);
        // US switched on 10 March, UK only on 31 March.
        assert_eq!(at(2024, 3, 20, America::New_York, Europe::London).hours, 4.0);
    }

    #[test]
    fn tokyo_to_los_angeles_is_not_wrapped() {
        let diff = at(2024, 6, 1, Asia::Tokyo, America::Los_Angeles);
        assert_eq!(diff.hours, -16.0);
        assert_eq!(diff.direction, Direction::Westward);
        assert!(!diff.is_eastward());
    }

    #[test]
    fn fractional_offsets() {
        let diff = at(2024, 1, 10, Europe::London, Asia::Kolkata);
        assert_eq!(diff.hours, 5.5);
        assert_eq!(diff.direction, Direction::Eastward);
    }

    #[test]
    fn negligible_threshold() {
        assert_eq!(TimeDifference::from_hours(0.0, 0.5).direction, Direction::None);
        let slight = TimeDifference::from_hours(0.25, 0.5);
        assert_eq!(slight.direction, Direction::None);
        assert!(slight.is_eastward());
        assert!(slight.is_negligible());
        assert_eq!(TimeDifference::from_hours(-0.5, 0.5).direction, Direction::Westward);
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Direction::Eastward).unwrap(), "\"eastward\"");
        assert_eq!(serde_json::to_string(&Direction::None).unwrap(), "\"none\"");
    }
}
