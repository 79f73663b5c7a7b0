pub mod calc;
pub mod config;
pub mod timezones;

use clap::{Parser, Subcommand};

/// Jetlag sleep calculator: personalised sleep schedules for long-haul trips.
#[derive(Debug, Parser)]
#[command(name = "jetlag", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server (default when no subcommand is given).
    Serve,
    /// Calculate a sleep schedule and print it.
    Calc {
        /// Origin timezone: an IANA name or a catalog number (see `jetlag timezones`).
        #[arg(long = "from", default_value = "America/New_York")]
        origin: String,
        /// Destination timezone: an IANA name or a catalog number.
        #[arg(long = "to", default_value = "Europe/London")]
        dest: String,
        /// Departure in origin local time, "YYYY-MM-DD HH:MM".
        #[arg(long = "depart")]
        departure: String,
        /// Flight duration in hours.
        #[arg(long = "hours")]
        flight_hours: f64,
        /// Print the raw JSON result instead of the report.
        #[arg(long)]
        json: bool,
    },
    /// List the built-in timezone catalog.
    Timezones {
        /// List every identifier the calculator accepts instead.
        #[arg(long)]
        all: bool,
    },
    /// Configuration utilities.
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Print version information.
    Version,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Parse the config file and report any errors.
    Validate,
    /// Dump the resolved configuration (with defaults) as TOML.
    Show,
}

// ── Config loading helper ─────────────────────────────────────────────

/// Load the configuration from the path specified by `JETLAG_CONFIG` (or
/// `config.toml` by default).  A missing file yields the defaults.
/// Returns the parsed [`Config`] and the path that was used.
pub fn load_config() -> anyhow::Result<(jl_domain::config::Config, String)> {
    let config_path =
        std::env::var("JETLAG_CONFIG").unwrap_or_else(|_| "config.toml".into());

    let config = if std::path::Path::new(&config_path).exists() {
        let raw = std::fs::read_to_string(&config_path)
            .map_err(|e| anyhow::anyhow!("reading {config_path}: {e}"))?;
        toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("parsing {config_path}: {e}"))?
    } else {
        jl_domain::config::Config::default()
    };

    Ok((config, config_path))
}
