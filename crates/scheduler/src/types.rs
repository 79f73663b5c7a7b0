use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Serialize, Serializer};

use crate::clock::DATE_TIME_FORMAT;
use crate::offset::Direction;

/// One night of the plan.  Pre-flight entries are on the origin clock,
/// post-flight entries on the destination clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepRecommendation {
    pub day_label: String,
    #[serde(serialize_with = "wall_clock")]
    pub bedtime: NaiveDateTime,
    #[serde(serialize_with = "wall_clock")]
    pub wake_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub time_difference_hours: f64,
    /// Arrival on the destination clock, e.g. "2024-12-16 03:00 GMT".
    pub arrival_time_dest: String,
    /// The same instant on the origin clock.
    pub arrival_time_origin: String,
    pub departure_time_utc: DateTime<Utc>,
    pub arrival_time_utc: DateTime<Utc>,
    pub is_eastward: bool,
    pub direction: Direction,
    pub pre_flight_sleep: Vec<SleepRecommendation>,
    pub post_flight_sleep: Vec<SleepRecommendation>,
    pub tips: Vec<String>,
    /// Abbreviation at departure.
    pub origin_tz_abbrev: String,
    /// Abbreviation at arrival.
    pub dest_tz_abbrev: String,
}

fn wall_clock<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&dt.format(DATE_TIME_FORMAT))
}
