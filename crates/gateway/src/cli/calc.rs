//! `jetlag calc`: one-shot schedule calculation.

use std::fmt::Write as _;

use jl_domain::config::Config;
use jl_scheduler::zones::catalog_entry;
use jl_scheduler::{calculate_schedule, Direction, ScheduleRequest, ScheduleResult, ZoneDb};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

pub fn run(
    config: &Config,
    origin: &str,
    dest: &str,
    departure: String,
    flight_hours: f64,
    json_output: bool,
) -> anyhow::Result<()> {
    let zones = ZoneDb::from_config(&config.scheduler);
    let request = ScheduleRequest::new(
        resolve_zone_arg(origin),
        resolve_zone_arg(dest),
        departure,
        flight_hours,
    );

    let result = calculate_schedule(&zones, &config.scheduler, &request)?;

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| anyhow::anyhow!("serializing schedule: {e}"))?;
        println!("{json}");
    } else {
        print!("{}", render_report(&result));
    }
    Ok(())
}

/// A bare number picks the catalog entry at that (1-based) position;
/// anything else is taken as an IANA name.
pub fn resolve_zone_arg(arg: &str) -> String {
    let arg = arg.trim();
    arg.parse::<usize>()
        .ok()
        .and_then(catalog_entry)
        .map(|e| e.id.to_string())
        .unwrap_or_else(|| arg.to_string())
}

/// Human-readable report of a schedule.
pub fn render_report(r: &ScheduleResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, r);
    out
}

fn write_report(out: &mut String, r: &ScheduleResult) -> std::fmt::Result {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "JETLAG SLEEP RECOMMENDATIONS")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "\nTime Difference: {:.1} hours", r.time_difference_hours)?;
    let direction = match r.direction {
        Direction::Eastward => "Eastward",
        Direction::Westward => "Westward",
        Direction::None => "No significant change",
    };
    writeln!(out, "Direction: {direction}")?;
    writeln!(out, "Arrival Time (Destination): {}", r.arrival_time_dest)?;
    writeln!(out, "Arrival Time (Origin clock): {}", r.arrival_time_origin)?;

    writeln!(out, "\n{THIN_RULE}")?;
    writeln!(out, "PRE-FLIGHT SLEEP SCHEDULE (Adjust gradually)")?;
    writeln!(out, "{THIN_RULE}")?;
    if r.pre_flight_sleep.is_empty() {
        writeln!(out, "\nNo adjustment needed before departure.")?;
    }
    for sleep in &r.pre_flight_sleep {
        writeln!(out, "\n{}:", sleep.day_label)?;
        writeln!(out, "  Bedtime:  {} ({})", sleep.bedtime.format("%Y-%m-%d %H:%M"), r.origin_tz_abbrev)?;
        writeln!(out, "  Wake up:  {} ({})", sleep.wake_time.format("%Y-%m-%d %H:%M"), r.origin_tz_abbrev)?;
        if let Some(note) = &sleep.note {
            writeln!(out, "  Note:     {note}")?;
        }
    }

    writeln!(out, "\n{THIN_RULE}")?;
    writeln!(out, "POST-FLIGHT SLEEP SCHEDULE")?;
    writeln!(out, "{THIN_RULE}")?;
    for sleep in &r.post_flight_sleep {
        writeln!(out, "\n{}:", sleep.day_label)?;
        writeln!(out, "  Bedtime:  {} ({})", sleep.bedtime.format("%Y-%m-%d %H:%M"), r.dest_tz_abbrev)?;
        writeln!(out, "  Wake up:  {} ({})", sleep.wake_time.format("%Y-%m-%d %H:%M"), r.dest_tz_abbrev)?;
        if let Some(note) = &sleep.note {
            writeln!(out, "  Note:     {note}")?;
        }
    }

    writeln!(out, "\n{THIN_RULE}")?;
    writeln!(out, "TIPS TO MINIMIZE JETLAG")?;
    writeln!(out, "{THIN_RULE}")?;
    for (i, tip) in r.tips.iter().enumerate() {
        writeln!(out, "{}. {tip}", i + 1)?;
    }

    writeln!(out, "\n{RULE}\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jl_domain::config::SchedulerConfig;

    #[test]
    fn zone_args_accept_catalog_numbers() {
        assert_eq!(resolve_zone_arg("1"), "America/New_York");
        assert_eq!(resolve_zone_arg(" 7 "), "Asia/Tokyo");
        assert_eq!(resolve_zone_arg("Europe/Lisbon"), "Europe/Lisbon");
        // Out of range numbers are passed through and fail validation later.
        assert_eq!(resolve_zone_arg("999"), "999");
    }

    #[test]
    fn report_lists_every_section() {
        let req = ScheduleRequest::new("America/New_York", "Europe/London", "2024-12-15 14:30", 7.5);
        let result =
            calculate_schedule(&ZoneDb::full(), &SchedulerConfig::default(), &req).unwrap();
        let report = render_report(&result);

        assert!(report.contains("Time Difference: 5.0 hours"));
        assert!(report.contains("Direction: Eastward"));
        assert!(report.contains("Arrival Time (Destination): 2024-12-16 03:00 GMT"));
        assert!(report.contains("3 days before departure:"));
        assert!(report.contains("  Bedtime:  2024-12-12 20:30 (EST)"));
        assert!(report.contains("Night 1 at destination:"));
        assert!(report.contains("1. "));
    }

    #[test]
    fn report_for_same_zone_trip() {
        let req = ScheduleRequest::new("Europe/Paris", "Europe/Berlin", "2024-05-10 08:00", 1.75);
        let result =
            calculate_schedule(&ZoneDb::full(), &SchedulerConfig::default(), &req).unwrap();
        let report = render_report(&result);
        assert!(report.contains("Direction: No significant change"));
        assert!(report.contains("No adjustment needed before departure."));
    }
}
