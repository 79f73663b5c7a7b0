//! Timezone handle and the catalog of commonly used zones.
//!
//! [`ZoneDb`] is built once at startup and shared read-only; every lookup
//! goes through it so the set of accepted identifiers is explicit and
//! enumerable.

use std::collections::BTreeMap;

use chrono::{DateTime, Offset};
use chrono_tz::{OffsetName, Tz, TZ_VARIANTS};
use jl_domain::config::SchedulerConfig;
use jl_domain::{Field, ValidationError};

/// One entry of the built-in timezone catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

const fn entry(id: &'static str, label: &'static str) -> CatalogEntry {
    CatalogEntry { id, label }
}

/// Common zones, one or more per continent.  The order is stable: the CLI
/// addresses entries by their 1-based position.
pub const CATALOG: &[CatalogEntry] = &[
    entry("America/New_York", "New York (EST/EDT)"),
    entry("America/Chicago", "Chicago (CST/CDT)"),
    entry("America/Denver", "Denver (MST/MDT)"),
    entry("America/Los_Angeles", "Los Angeles (PST/PDT)"),
    entry("Europe/London", "London (GMT/BST)"),
    entry("Europe/Paris", "Paris (CET/CEST)"),
    entry("Asia/Tokyo", "Tokyo (JST)"),
    entry("Asia/Shanghai", "Shanghai (CST)"),
    entry("Australia/Sydney", "Sydney (AEDT/AEST)"),
    entry("Pacific/Auckland", "Auckland (NZDT/NZST)"),
    entry("America/Anchorage", "Anchorage (AKST/AKDT)"),
    entry("Pacific/Honolulu", "Honolulu (HST)"),
    entry("America/Toronto", "Toronto (EST/EDT)"),
    entry("America/Mexico_City", "Mexico City (CST)"),
    entry("America/Sao_Paulo", "São Paulo (BRT)"),
    entry("America/Argentina/Buenos_Aires", "Buenos Aires (ART)"),
    entry("Europe/Berlin", "Berlin (CET/CEST)"),
    entry("Europe/Moscow", "Moscow (MSK)"),
    entry("Africa/Cairo", "Cairo (EET/EEST)"),
    entry("Africa/Lagos", "Lagos (WAT)"),
    entry("Africa/Johannesburg", "Johannesburg (SAST)"),
    entry("Asia/Dubai", "Dubai (GST)"),
    entry("Asia/Kolkata", "Kolkata (IST)"),
    entry("Asia/Singapore", "Singapore (SGT)"),
    entry("UTC", "Coordinated Universal Time (UTC)"),
];

/// Look up a catalog entry by its 1-based position.
pub fn catalog_entry(position: usize) -> Option<&'static CatalogEntry> {
    position.checked_sub(1).and_then(|i| CATALOG.get(i))
}

/// Read-only set of the timezones a request may name.
#[derive(Debug, Clone)]
pub struct ZoneDb {
    zones: BTreeMap<&'static str, Tz>,
}

impl ZoneDb {
    /// Every zone compiled into the IANA database.
    pub fn full() -> Self {
        Self {
            zones: TZ_VARIANTS.iter().map(|tz| (tz.name(), *tz)).collect(),
        }
    }

    /// Only the zones listed in [`CATALOG`].
    pub fn catalog_only() -> Self {
        let zones = CATALOG
            .iter()
            .filter_map(|e| e.id.parse::<Tz>().ok())
            .map(|tz| (tz.name(), tz))
            .collect();
        Self { zones }
    }

    pub fn from_config(config: &SchedulerConfig) -> Self {
        if config.restrict_to_catalog {
            Self::catalog_only()
        } else {
            Self::full()
        }
    }

    /// Resolve `name` for the given request field.
    pub fn resolve(&self, field: Field, name: &str) -> Result<Tz, ValidationError> {
        self.zones
            .get(name.trim())
            .copied()
            .ok_or_else(|| ValidationError::UnknownTimezone {
                field,
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zone identifiers in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.zones.keys().copied()
    }
}

/// UTC offset of `dt` in whole seconds east of Greenwich.
pub fn offset_seconds(dt: &DateTime<Tz>) -> i32 {
    dt.offset().fix().local_minus_utc()
}

/// Abbreviation in force at `dt` ("EST", "BST", ...).  Zones whose tzdata
/// entry has no letters get the numeric form tzdata uses ("+04", "+0530").
pub fn abbreviation(dt: &DateTime<Tz>) -> String {
    match dt.offset().abbreviation() {
        Some(abbr) => abbr.to_string(),
        None => numeric_abbreviation(offset_seconds(dt)),
    }
}

fn numeric_abbreviation(offset_secs: i32) -> String {
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let total_minutes = offset_secs.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if minutes == 0 {
        format!("{sign}{hours:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn every_catalog_entry_is_a_real_zone() {
        let db = ZoneDb::full();
        for e in CATALOG {
            assert!(db.contains(e.id), "{} missing from tz database", e.id);
        }
        assert_eq!(ZoneDb::catalog_only().len(), CATALOG.len());
    }

    #[test]
    fn catalog_positions_are_one_based() {
        assert_eq!(catalog_entry(1).map(|e| e.id), Some("America/New_York"));
        assert_eq!(catalog_entry(10).map(|e| e.id), Some("Pacific/Auckland"));
        assert!(catalog_entry(0).is_none());
        assert!(catalog_entry(CATALOG.len() + 1).is_none());
    }

    #[test]
    fn resolve_reports_the_field() {
        let db = ZoneDb::full();
        assert_eq!(
            db.resolve(Field::OriginTz, "Asia/Tokyo").unwrap(),
            chrono_tz::Asia::Tokyo
        );
        let err = db.resolve(Field::DestTz, "Mars/Colony").unwrap_err();
        assert_eq!(err.field(), Field::DestTz);
    }

    #[test]
    fn resolve_rejects_lookalikes() {
        let db = ZoneDb::full();
        assert!(db.resolve(Field::OriginTz, "").is_err());
        assert!(db.resolve(Field::OriginTz, "GMT+5").is_err());
        assert!(db.resolve(Field::OriginTz, "america/new_york").is_err());
    }

    #[test]
    fn catalog_only_db_rejects_uncatalogued_zones() {
        let db = ZoneDb::catalog_only();
        assert!(db.resolve(Field::OriginTz, "Europe/London").is_ok());
        assert!(db.resolve(Field::OriginTz, "Europe/Lisbon").is_err());
    }

    #[test]
    fn abbreviation_follows_dst() {
        let winter = Utc
            .with_ymd_and_hms(2024, 12, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&chrono_tz::America::New_York);
        let summer = Utc
            .with_ymd_and_hms(2024, 7, 15, 12, 0, 0)
            .unwrap()
            .with_timezone(&chrono_tz::America::New_York);
        assert_eq!(abbreviation(&winter), "EST");
        assert_eq!(abbreviation(&summer), "EDT");
        assert_eq!(offset_seconds(&winter), -5 * 3600);
        assert_eq!(offset_seconds(&summer), -4 * 3600);
    }

    #[test]
    fn numeric_abbreviation_formats() {
        assert_eq!(numeric_abbreviation(4 * 3600), "+04");
        assert_eq!(numeric_abbreviation(5 * 3600 + 1800), "+0530");
        assert_eq!(numeric_abbreviation(-3 * 3600), "-03");
        assert_eq!(numeric_abbreviation(0), "+00");
    }
}
