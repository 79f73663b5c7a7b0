//! Free-text advice, chosen by direction and magnitude.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use jl_domain::config::SchedulerConfig;

use crate::clock::{in_sleep_window, sleep_minutes};
use crate::offset::{Direction, TimeDifference};

const LARGE_DIFFERENCE_HOURS: f64 = 6.0;
const VERY_LARGE_EASTWARD_HOURS: f64 = 9.0;

pub fn select(
    diff: &TimeDifference,
    departure_utc: DateTime<Utc>,
    arrival_utc: DateTime<Utc>,
    dest: Tz,
    policy: &SchedulerConfig,
) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();
    let magnitude = diff.magnitude();

    if diff.is_negligible() {
        tips.push("Little or no time difference: keep your usual sleep schedule.");
    }
    if magnitude >= LARGE_DIFFERENCE_HOURS {
        tips.push("Large time difference detected. Consider melatonin supplements.");
        tips.push("Expect several days to fully adjust; plan demanding activities later in the trip.");
    }
    match diff.direction {
        Direction::Eastward => {
            tips.push("Eastward travel: Expose yourself to morning light at destination.");
            tips.push("Avoid caffeine after 2 PM local time at destination.");
            if magnitude >= VERY_LARGE_EASTWARD_HOURS {
                tips.push(
                    "Very large eastward shift: avoid bright light before about 10 AM local time on your first day, then seek it late morning.",
                );
            }
        }
        Direction::Westward => {
            tips.push("Westward travel: Expose yourself to evening light at destination.");
            tips.push("You may find it easier to adjust going west.");
        }
        Direction::None => {}
    }

    tips.push("Stay hydrated during flight.");
    tips.push("Avoid alcohol during flight.");

    let midpoint = departure_utc + (arrival_utc - departure_utc) / 2;
    let local_mid = midpoint.with_timezone(&dest).time();
    if in_sleep_window(local_mid, policy.bedtime, sleep_minutes(policy.sleep_hours)) {
        tips.push("It is nighttime at your destination during the flight: try to sleep on the plane.");
    } else {
        tips.push("It is daytime at your destination during the flight: try to stay awake on the plane.");
    }

    tips.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn run(hours: f64, depart_utc_hour: u32, flight_hours: i64, dest: Tz) -> Vec<String> {
        let dep = Utc.with_ymd_and_hms(2024, 12, 15, depart_utc_hour, 0, 0).unwrap();
        let arr = dep + Duration::hours(flight_hours);
        select(
            &TimeDifference::from_hours(hours, 0.5),
            dep,
            arr,
            dest,
            &SchedulerConfig::default(),
        )
    }

    #[test]
    fn eastward_tips() {
        let tips = run(5.0, 19, 8, chrono_tz::Europe::London);
        assert!(tips.iter().any(|t| t.contains("morning light")));
        assert!(tips.iter().any(|t| t.contains("caffeine")));
        assert!(!tips.iter().any(|t| t.contains("melatonin")));
        // Midpoint 23:00 GMT.
        assert!(tips.last().unwrap().contains("try to sleep"));
    }

    #[test]
    fn westward_large_tips() {
        let tips = run(-16.0, 0, 10, chrono_tz::America::Los_Angeles);
        assert!(tips[0].contains("melatonin"));
        assert!(tips.iter().any(|t| t.contains("evening light")));
        assert!(!tips.iter().any(|t| t.contains("caffeine")));
    }

    #[test]
    fn very_large_eastward_adds_light_timing() {
        let tips = run(10.0, 12, 12, chrono_tz::Asia::Tokyo);
        assert!(tips.iter().any(|t| t.starts_with("Very large eastward shift")));
    }

    #[test]
    fn negligible_difference_keeps_it_light() {
        let tips = run(0.0, 9, 2, chrono_tz::Europe::London);
        assert_eq!(tips[0], "Little or no time difference: keep your usual sleep schedule.");
        assert!(!tips.iter().any(|t| t.contains("Eastward") || t.contains("Westward")));
        // Midpoint 10:00 GMT.
        assert!(tips.last().unwrap().contains("stay awake"));
    }
}
