mod observability;
mod scheduler;
mod server;

pub use observability::*;
pub use scheduler::*;
pub use server::*;

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Top-level config
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub scheduler: SchedulerConfig,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Config validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Severity level for a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSeverity {
    Error,
    Warning,
}

/// A single configuration validation issue.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub severity: ConfigSeverity,
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            ConfigSeverity::Error => "ERROR",
            ConfigSeverity::Warning => "WARN",
        };
        write!(f, "[{tag}] {}: {}", self.field, self.message)
    }
}

impl Config {
    /// Validate the configuration and return a list of issues.
    ///
    /// Returns an empty vec when everything looks good.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut push = |severity, field: &str, message: String| {
            errors.push(ConfigError {
                severity,
                field: field.into(),
                message,
            });
        };

        if self.server.port == 0 {
            push(
                ConfigSeverity::Error,
                "server.port",
                "port must be greater than 0".into(),
            );
        }
        if self.server.host.is_empty() {
            push(
                ConfigSeverity::Error,
                "server.host",
                "host must not be empty".into(),
            );
        }
        if let Some(rl) = &self.server.rate_limit {
            if rl.requests_per_second == 0 || rl.burst_size == 0 {
                push(
                    ConfigSeverity::Error,
                    "server.rate_limit",
                    "requests_per_second and burst_size must be > 0".into(),
                );
            }
        }
        if self.server.cors.allowed_origins.len() == 1
            && self.server.cors.allowed_origins[0] == "*"
        {
            push(
                ConfigSeverity::Warning,
                "server.cors.allowed_origins",
                "wildcard \"*\" allows all origins".into(),
            );
        }

        if !(0.0..=1.0).contains(&self.observability.sample_rate) {
            push(
                ConfigSeverity::Error,
                "observability.sample_rate",
                format!("{} is outside 0.0..=1.0", self.observability.sample_rate),
            );
        }

        let s = &self.scheduler;
        if !(s.sleep_hours > 0.0 && s.sleep_hours < 24.0) {
            push(
                ConfigSeverity::Error,
                "scheduler.sleep_hours",
                format!("{} must be between 0 and 24 (exclusive)", s.sleep_hours),
            );
        }
        if !(s.max_daily_shift_hours > 0.0 && s.max_daily_shift_hours <= 12.0) {
            push(
                ConfigSeverity::Error,
                "scheduler.max_daily_shift_hours",
                format!("{} must be in (0, 12]", s.max_daily_shift_hours),
            );
        } else if s.max_daily_shift_hours > 3.0 {
            push(
                ConfigSeverity::Warning,
                "scheduler.max_daily_shift_hours",
                "shifts above 3h/day exceed usual circadian guidance".into(),
            );
        }
        if s.max_preflight_days == 0 || s.max_preflight_days > 3 {
            push(
                ConfigSeverity::Error,
                "scheduler.max_preflight_days",
                format!("{} must be 1, 2 or 3", s.max_preflight_days),
            );
        }
        if !(s.negligible_difference_hours >= 0.0 && s.negligible_difference_hours < 3.0) {
            push(
                ConfigSeverity::Error,
                "scheduler.negligible_difference_hours",
                format!("{} must be in [0, 3)", s.negligible_difference_hours),
            );
        }
        if !(s.max_flight_hours > 0.0 && s.max_flight_hours.is_finite()) {
            push(
                ConfigSeverity::Error,
                "scheduler.max_flight_hours",
                format!("{} must be a positive number", s.max_flight_hours),
            );
        }
        if !(s.pre_departure_buffer_hours >= 0.0 && s.pre_departure_buffer_hours < 24.0) {
            push(
                ConfigSeverity::Error,
                "scheduler.pre_departure_buffer_hours",
                format!("{} must be in [0, 24)", s.pre_departure_buffer_hours),
            );
        }

        errors
    }
}
