use jl_domain::config::Config;
use jl_scheduler::{ZoneDb, CATALOG};

/// Print the catalog with the numbers `jetlag calc` accepts, or with `all`
/// every identifier the configured zone set accepts.
pub fn print(config: &Config, all: bool) {
    if all {
        let zones = ZoneDb::from_config(&config.scheduler);
        for name in zones.names() {
            println!("{name}");
        }
        println!("\n{} timezones", zones.len());
        return;
    }
    for (i, entry) in CATALOG.iter().enumerate() {
        println!("{:>3}. {:<34} {}", i + 1, entry.label, entry.id);
    }
}
