//! Request validation: turns the raw strings and numbers of a
//! [`ScheduleRequest`] into a resolved [`Trip`] or the first failure.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, TimeZone};
use chrono_tz::Tz;
use jl_domain::config::SchedulerConfig;
use jl_domain::{Field, ValidationError};
use serde::{Deserialize, Serialize};

use crate::zones::ZoneDb;

/// Accepted departure formats; the first is canonical, the second is what
/// HTML `datetime-local` inputs submit.
const DEPARTURE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Departure years accepted; tz rules and schedule arithmetic stay in range.
const DEPARTURE_YEARS: std::ops::RangeInclusive<i32> = 1900..=2200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// e.g. "America/New_York"
    pub origin_tz: String,
    /// e.g. "Europe/London"
    pub dest_tz: String,
    /// Local time at the origin, "YYYY-MM-DD HH:MM".
    pub departure_time: String,
    pub flight_duration_hours: f64,
}

impl ScheduleRequest {
    pub fn new(
        origin_tz: impl Into<String>,
        dest_tz: impl Into<String>,
        departure_time: impl Into<String>,
        flight_duration_hours: f64,
    ) -> Self {
        Self {
            origin_tz: origin_tz.into(),
            dest_tz: dest_tz.into(),
            departure_time: departure_time.into(),
            flight_duration_hours,
        }
    }

    /// Validate every field, in request order, and stop at the first error.
    pub fn validate(&self, zones: &ZoneDb, policy: &SchedulerConfig) -> Result<Trip, ValidationError> {
        let origin = zones.resolve(Field::OriginTz, &self.origin_tz)?;
        let dest = zones.resolve(Field::DestTz, &self.dest_tz)?;
        let naive = parse_departure(&self.departure_time)?;
        let departure = localize(origin, naive, &self.departure_time)?;
        let duration = flight_duration(self.flight_duration_hours, policy.max_flight_hours)?;
        Ok(Trip {
            origin,
            dest,
            departure,
            duration,
        })
    }
}

/// A validated request.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub origin: Tz,
    pub dest: Tz,
    /// Departure instant on the origin clock.
    pub departure: DateTime<Tz>,
    pub duration: Duration,
}

pub fn parse_departure(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    let mut last_err = None;
    for fmt in DEPARTURE_FORMATS {
        match NaiveDateTime::parse_from_str(trimmed, fmt) {
            Ok(dt) if DEPARTURE_YEARS.contains(&dt.year()) => return Ok(dt),
            Ok(dt) => {
                return Err(ValidationError::InvalidTimeFormat {
                    field: Field::DepartureTime,
                    value: value.to_string(),
                    reason: format!(
                        "year {} is outside {}..={}",
                        dt.year(),
                        DEPARTURE_YEARS.start(),
                        DEPARTURE_YEARS.end()
                    ),
                });
            }
            Err(e) => last_err = Some(e),
        }
    }
    let detail = last_err.map(|e| e.to_string()).unwrap_or_default();
    Err(ValidationError::InvalidTimeFormat {
        field: Field::DepartureTime,
        value: value.to_string(),
        reason: format!("expected 'YYYY-MM-DD HH:MM' ({detail})"),
    })
}

/// Pin a wall-clock time to an instant in `tz`.
///
/// Fall-back overlaps take the earlier instant.  Spring-forward gaps have no
/// instant at all and are rejected.
fn localize(tz: Tz, naive: NaiveDateTime, raw: &str) -> Result<DateTime<Tz>, ValidationError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => Err(ValidationError::InvalidTimeFormat {
            field: Field::DepartureTime,
            value: raw.to_string(),
            reason: format!("this local time does not exist in {} (daylight-saving gap)", tz.name()),
        }),
    }
}

fn flight_duration(hours: f64, max_hours: f64) -> Result<Duration, ValidationError> {
    let reject = |reason: String| ValidationError::InvalidDuration {
        field: Field::FlightDurationHours,
        value: hours,
        reason,
    };
    if !hours.is_finite() {
        return Err(reject("must be a finite number".into()));
    }
    if hours <= 0.0 {
        return Err(reject("must be greater than zero".into()));
    }
    if hours > max_hours {
        return Err(reject(format!("exceeds the {max_hours} hour limit")));
    }
    Ok(Duration::milliseconds((hours * 3_600_000.0).round() as i64))
}
