//! Nights after arrival, on the destination clock.

use chrono::{DateTime, Duration, NaiveDateTime};
use chrono_tz::Tz;
use jl_domain::config::SchedulerConfig;

use crate::clock::{ceil_to_quarter, in_sleep_window, sleep_minutes};
use crate::offset::{Direction, TimeDifference};
use crate::types::SleepRecommendation;

/// Settling-in time between a night-time arrival and going to bed.
const SETTLE_MINUTES: i64 = 30;

pub fn plan(
    arrival: &DateTime<Tz>,
    diff: &TimeDifference,
    policy: &SchedulerConfig,
) -> Vec<SleepRecommendation> {
    let nights = night_count(diff);
    let arrived = arrival.naive_local();
    let sleep = Duration::minutes(sleep_minutes(policy.sleep_hours));

    let (first_bedtime, first_note) = if in_sleep_window(arrived.time(), policy.bedtime, sleep.num_minutes()) {
        (
            ceil_to_quarter(arrived) + Duration::minutes(SETTLE_MINUTES),
            "You land during the local night: go to bed soon after reaching your accommodation",
        )
    } else {
        (
            next_bedtime(arrived, policy),
            "Try to stay awake until local bedtime",
        )
    };

    let mut out = Vec::with_capacity(nights);
    let mut bedtime = first_bedtime;
    for night in 1..=nights {
        if night > 1 {
            bedtime = next_bedtime(bedtime + sleep, policy);
        }
        let note = match night {
            1 => first_note.to_string(),
            2 => second_night_note(diff.direction).to_string(),
            _ => third_night_note(diff.direction).to_string(),
        };
        out.push(SleepRecommendation {
            day_label: format!("Night {night} at destination"),
            bedtime,
            wake_time: bedtime + sleep,
            note: Some(note),
        });
    }
    out
}

/// Larger differences get more reinforcement nights.
fn night_count(diff: &TimeDifference) -> usize {
    let magnitude = diff.magnitude();
    if diff.is_negligible() || magnitude < 3.0 {
        1
    } else if magnitude < 6.0 {
        2
    } else {
        3
    }
}

/// First habitual bedtime at or after `after`.
fn next_bedtime(after: NaiveDateTime, policy: &SchedulerConfig) -> NaiveDateTime {
    let same_day = after.date().and_time(policy.bedtime);
    if same_day >= after {
        same_day
    } else {
        same_day + Duration::days(1)
    }
}

fn second_night_note(direction: Direction) -> &'static str {
    match direction {
        Direction::Eastward => {
            "Get outdoor light early in the morning and keep any nap under 30 minutes"
        }
        Direction::Westward => {
            "Stay in daylight through the late afternoon to help you last until bedtime"
        }
        Direction::None => "Keep to local bedtime",
    }
}

fn third_night_note(direction: Direction) -> &'static str {
    match direction {
        Direction::Eastward => {
            "Keep to local bedtime even if you are not sleepy yet; your body clock is catching up"
        }
        Direction::Westward => {
            "Keep to local bedtime even if you wake early; your body clock is catching up"
        }
        Direction::None => "Keep to local bedtime",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn arrive(tz: Tz, y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Tz> {
        tz.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn daytime_arrival_waits_for_local_bedtime() {
        let arrival = arrive(chrono_tz::Europe::Paris, 2024, 9, 2, 8, 15);
        let plan = plan(&arrival, &TimeDifference::from_hours(6.0, 0.5), &SchedulerConfig::default());

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].bedtime, at(2024, 9, 2, 22, 0));
        assert_eq!(plan[0].wake_time, at(2024, 9, 3, 6, 0));
        assert_eq!(plan[0].note.as_deref(), Some("Try to stay awake until local bedtime"));
        assert_eq!(plan[1].bedtime, at(2024, 9, 3, 22, 0));
        assert_eq!(plan[2].day_label, "Night 3 at destination");
        assert_eq!(plan[2].bedtime, at(2024, 9, 4, 22, 0));
    }

    #[test]
    fn night_arrival_goes_to_bed_soon() {
        let arrival = Utc
            .with_ymd_and_hms(2024, 12, 16, 3, 0, 0)
            .unwrap()
            .with_timezone(&chrono_tz::Europe::London);
        let plan = plan(&arrival, &TimeDifference::from_hours(5.0, 0.5), &SchedulerConfig::default());

        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].bedtime, at(2024, 12, 16, 3, 30));
        assert_eq!(plan[0].wake_time, at(2024, 12, 16, 11, 30));
        assert!(plan[0].note.as_deref().unwrap().contains("local night"));
        // Night 2 is the next habitual bedtime after waking.
        assert_eq!(plan[1].bedtime, at(2024, 12, 16, 22, 0));
    }

    #[test]
    fn late_evening_arrival_counts_as_night() {
        let arrival = arrive(chrono_tz::UTC, 2024, 1, 5, 23, 10);
        let plan = plan(&arrival, &TimeDifference::from_hours(-1.0, 0.5), &SchedulerConfig::default());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].bedtime, at(2024, 1, 5, 23, 45));
    }

    #[test]
    fn night_count_scales_with_magnitude() {
        let n = |h: f64| night_count(&TimeDifference::from_hours(h, 0.5));
        assert_eq!(n(0.0), 1);
        assert_eq!(n(2.5), 1);
        assert_eq!(n(-3.0), 2);
        assert_eq!(n(5.5), 2);
        assert_eq!(n(6.0), 3);
        assert_eq!(n(-16.0), 3);
    }

    #[test]
    fn bedtimes_never_precede_arrival() {
        let policy = SchedulerConfig::default();
        for hour in 0..24 {
            let arrival = arrive(chrono_tz::Asia::Tokyo, 2024, 4, 1, hour, 40);
            for r in plan(&arrival, &TimeDifference::from_hours(8.0, 0.5), &policy) {
                assert!(r.bedtime >= arrival.naive_local(), "arrival hour {hour}");
                assert!(r.wake_time > r.bedtime);
            }
        }
    }
}
