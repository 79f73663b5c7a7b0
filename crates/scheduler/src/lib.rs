//! Jetlag sleep scheduling.
//!
//! [`calculate_schedule`] is a pure function of its inputs: the shared
//! [`ZoneDb`], the sleep policy and one [`ScheduleRequest`].  It validates
//! the request up front and either returns a complete [`ScheduleResult`] or
//! the first [`ValidationError`].

pub mod clock;
pub mod offset;
pub mod postflight;
pub mod preflight;
pub mod request;
pub mod tips;
pub mod types;
pub mod zones;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use jl_domain::config::SchedulerConfig;

pub use jl_domain::{Field, ValidationError};
pub use offset::{Direction, TimeDifference};
pub use request::{ScheduleRequest, Trip};
pub use types::{ScheduleResult, SleepRecommendation};
pub use zones::{CatalogEntry, ZoneDb, CATALOG};

pub fn calculate_schedule(
    zones: &ZoneDb,
    policy: &SchedulerConfig,
    request: &ScheduleRequest,
) -> Result<ScheduleResult, ValidationError> {
    let trip = request.validate(zones, policy)?;

    let departure_utc = trip.departure.with_timezone(&Utc);
    let diff = TimeDifference::at(
        trip.origin,
        trip.dest,
        departure_utc,
        policy.negligible_difference_hours,
    );
    let arrival_utc = departure_utc + trip.duration;
    let arrival_dest = arrival_utc.with_timezone(&trip.dest);
    let arrival_origin = arrival_utc.with_timezone(&trip.origin);

    let pre_flight_sleep = preflight::plan(&trip.departure, &diff, policy);
    let post_flight_sleep = postflight::plan(&arrival_dest, &diff, policy);
    let tips = tips::select(&diff, departure_utc, arrival_utc, trip.dest, policy);

    tracing::debug!(
        origin = trip.origin.name(),
        dest = trip.dest.name(),
        time_difference_hours = diff.hours,
        direction = ?diff.direction,
        pre_flight_days = pre_flight_sleep.len(),
        post_flight_nights = post_flight_sleep.len(),
        "schedule calculated"
    );

    Ok(ScheduleResult {
        time_difference_hours: diff.hours,
        arrival_time_dest: stamp(&arrival_dest),
        arrival_time_origin: stamp(&arrival_origin),
        departure_time_utc: departure_utc,
        arrival_time_utc: arrival_utc,
        is_eastward: diff.is_eastward(),
        direction: diff.direction,
        pre_flight_sleep,
        post_flight_sleep,
        tips,
        origin_tz_abbrev: zones::abbreviation(&trip.departure),
        dest_tz_abbrev: zones::abbreviation(&arrival_dest),
    })
}

/// "YYYY-MM-DD HH:MM ABBR"
fn stamp(dt: &DateTime<Tz>) -> String {
    format!(
        "{} {}",
        dt.format(clock::DATE_TIME_FORMAT),
        zones::abbreviation(dt)
    )
}
