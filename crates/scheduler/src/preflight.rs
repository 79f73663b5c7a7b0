//! Gradual shift of the sleep window during the days before departure.
//!
//! Linear policy: the difference is spread over `ceil(|diff|)` days (at most
//! `max_preflight_days`), each day adding the same step, capped at
//! `max_daily_shift_hours`.  Shifts are rounded to quarter hours.
//!
//! Every night stays on an evening before the departure date: a bedtime is
//! never later than 23:45 of its evening, and a westward shift past that point
//! is carried by the wake time alone.

use chrono::{DateTime, Duration, NaiveTime};
use chrono_tz::Tz;
use jl_domain::config::SchedulerConfig;

use crate::clock::{human_span, quarter_minutes, sleep_minutes};
use crate::offset::{Direction, TimeDifference};
use crate::types::SleepRecommendation;

/// Latest bedtime of a pre-flight night (23:45), in minutes after midnight
/// of its own evening.
const LATEST_BEDTIME_MINUTES: i64 = 23 * 60 + 45;

pub fn plan(
    departure: &DateTime<Tz>,
    diff: &TimeDifference,
    policy: &SchedulerConfig,
) -> Vec<SleepRecommendation> {
    if diff.is_negligible() {
        return Vec::new();
    }

    let magnitude = diff.magnitude();
    let max_days = policy.max_preflight_days.clamp(1, 3);
    let days = (magnitude.ceil() as u32).clamp(1, max_days);
    let step = (magnitude / f64::from(days)).min(policy.max_daily_shift_hours);

    let departure_local = departure.naive_local();
    let latest_wake = departure_local - Duration::minutes(quarter_minutes(policy.pre_departure_buffer_hours));
    let sleep = Duration::minutes(sleep_minutes(policy.sleep_hours));

    let mut out = Vec::with_capacity(days as usize);
    for k in 1..=days {
        let days_before = days - k + 1;
        let shift_minutes = quarter_minutes(step * f64::from(k));
        let shift = Duration::minutes(shift_minutes);

        let evening = departure_local.date() - Duration::days(i64::from(days_before));
        let usual = evening.and_time(policy.bedtime);
        let (shifted, relative) = match diff.direction {
            Direction::Eastward => (usual - shift, "earlier"),
            _ => (usual + shift, "later"),
        };

        // Bedtimes stay on the anchor evening; the wake time keeps the full shift.
        let latest_bedtime =
            evening.and_time(NaiveTime::default()) + Duration::minutes(LATEST_BEDTIME_MINUTES);
        let bedtime = shifted.min(latest_bedtime);
        let mut wake_time = shifted + sleep;
        let mut note = if shift_minutes == 0 {
            "Keep your usual sleep times".to_string()
        } else {
            format!(
                "Go to bed and get up {} {relative} than usual",
                human_span(shift_minutes)
            )
        };
        if shifted > latest_bedtime {
            note = format!(
                "Stay up until {}, then sleep in until {}",
                bedtime.format("%H:%M"),
                wake_time.format("%H:%M")
            );
        }
        if wake_time > latest_wake {
            wake_time = latest_wake;
            note.push_str("; wake time brought forward to leave time before your flight");
        }
        if wake_time <= bedtime {
            tracing::debug!(days_before, "pre-flight night overlaps departure, skipped");
            continue;
        }

        out.push(SleepRecommendation {
            day_label: day_label(days_before),
            bedtime,
            wake_time,
            note: Some(note),
        });
    }
    out
}

fn day_label(days_before: u32) -> String {
    if days_before == 1 {
        "1 day before departure".into()
    } else {
        format!("{days_before} days before departure")
    }
}
