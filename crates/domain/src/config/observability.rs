use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Observability
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `[observability]`: where `jetlag serve` sends its traces.
///
/// The server always writes JSON log lines to stdout; a `/calculate` call
/// shows up as a tower-http request span wrapping the scheduler's
/// `schedule calculated` event.  With `otlp_endpoint` set, those spans are
/// also exported over OTLP/gRPC.  One-shot commands (`calc`, `timezones`)
/// ignore this section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Collector address, e.g. `http://localhost:4317`.  Unset keeps traces local.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,

    /// Reported as `service.name`.
    #[serde(default = "d_service_name")]
    pub service_name: String,

    /// Fraction of request traces exported; `Config::validate` keeps it in `0.0..=1.0`.
    #[serde(default = "d_sample_rate")]
    pub sample_rate: f64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: d_service_name(),
            sample_rate: d_sample_rate(),
        }
    }
}

fn d_service_name() -> String {
    "jetlag".into()
}

fn d_sample_rate() -> f64 {
    1.0
}
