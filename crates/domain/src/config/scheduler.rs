use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Scheduler policy
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Tunables of the sleep-shift policy and request sanity limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Habitual local bedtime, `"HH:MM"`.
    #[serde(default = "d_bedtime", with = "hhmm")]
    pub bedtime: NaiveTime,
    #[serde(default = "d_sleep_hours")]
    pub sleep_hours: f64,
    /// Upper bound for the cumulative shift added per pre-flight day.
    #[serde(default = "d_max_daily_shift_hours")]
    pub max_daily_shift_hours: f64,
    #[serde(default = "d_max_preflight_days")]
    pub max_preflight_days: u32,
    /// Differences below this magnitude get no shift schedule.
    #[serde(default = "d_negligible_difference_hours")]
    pub negligible_difference_hours: f64,
    #[serde(default = "d_max_flight_hours")]
    pub max_flight_hours: f64,
    /// Minimum gap between the last pre-flight wake time and departure.
    #[serde(default = "d_pre_departure_buffer_hours")]
    pub pre_departure_buffer_hours: f64,
    /// Accept only the zones of the built-in catalog instead of the whole
    /// IANA database.
    #[serde(default)]
    pub restrict_to_catalog: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            bedtime: d_bedtime(),
            sleep_hours: d_sleep_hours(),
            max_daily_shift_hours: d_max_daily_shift_hours(),
            max_preflight_days: d_max_preflight_days(),
            negligible_difference_hours: d_negligible_difference_hours(),
            max_flight_hours: d_max_flight_hours(),
            pre_departure_buffer_hours: d_pre_departure_buffer_hours(),
            restrict_to_catalog: false,
        }
    }
}

fn d_bedtime() -> NaiveTime {
    NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default()
}
fn d_sleep_hours() -> f64 {
    8.0
}
fn d_max_daily_shift_hours() -> f64 {
    1.5
}
fn d_max_preflight_days() -> u32 {
    3
}
fn d_negligible_difference_hours() -> f64 {
    0.5
}
fn d_max_flight_hours() -> f64 {
    48.0
}
fn d_pre_departure_buffer_hours() -> f64 {
    2.0
}

/// `NaiveTime` as `"HH:MM"`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&t.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(raw.trim(), FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("expected HH:MM, got '{raw}': {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: SchedulerConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SchedulerConfig::default());
        assert_eq!(cfg.bedtime, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
        assert_eq!(cfg.max_preflight_days, 3);
        assert!(!cfg.restrict_to_catalog);
    }

    #[test]
    fn bedtime_parses_hh_mm() {
        let cfg: SchedulerConfig = toml::from_str(r#"bedtime = "23:30""#).unwrap();
        assert_eq!(cfg.bedtime, NaiveTime::from_hms_opt(23, 30, 0).unwrap());
    }

    #[test]
    fn bedtime_rejects_garbage() {
        let res: Result<SchedulerConfig, _> = toml::from_str(r#"bedtime = "late""#);
        assert!(res.is_err());
    }

    #[test]
    fn bedtime_serializes_back_to_hh_mm() {
        let json = serde_json::to_value(SchedulerConfig::default()).unwrap();
        assert_eq!(json["bedtime"], "22:00");
    }
}
