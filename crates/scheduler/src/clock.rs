//! Wall-clock helpers shared by the pre- and post-flight planners.

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};

pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Round a span given in hours to whole quarter hours, in minutes.
pub fn quarter_minutes(hours: f64) -> i64 {
    ((hours * 60.0 / 15.0).round() as i64) * 15
}

/// Next quarter hour at or after `dt`; seconds are dropped.
pub fn ceil_to_quarter(dt: NaiveDateTime) -> NaiveDateTime {
    let secs = i64::from(dt.time().num_seconds_from_midnight());
    let floored = dt.date().and_time(NaiveTime::default()) + Duration::seconds(secs - secs % 900);
    if floored < dt {
        floored + Duration::minutes(15)
    } else {
        floored
    }
}

/// Whether `t` falls in `[bedtime, bedtime + sleep_minutes)`, wrapping
/// past midnight.
pub fn in_sleep_window(t: NaiveTime, bedtime: NaiveTime, sleep_minutes: i64) -> bool {
    let minute_of = |t: NaiveTime| i64::from(t.num_seconds_from_midnight()) / 60;
    let (now, start) = (minute_of(t), minute_of(bedtime));
    let end = start + sleep_minutes;
    if end <= MINUTES_PER_DAY {
        now >= start && now < end
    } else {
        now >= start || now < end - MINUTES_PER_DAY
    }
}

/// "1h30m", "2h", "45m".
pub fn human_span(minutes: i64) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    match (h, m) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h{m:02}m"),
    }
}

/// Sleep duration of the policy in whole minutes.
pub fn sleep_minutes(sleep_hours: f64) -> i64 {
    (sleep_hours * 60.0).round() as i64
}
