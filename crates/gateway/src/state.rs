use std::sync::Arc;

use jl_domain::config::Config;
use jl_scheduler::ZoneDb;

/// Shared application state passed to all API handlers.
///
/// Both fields are read-only for the lifetime of the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Timezones requests may name; built once from `[scheduler]`.
    pub zones: Arc<ZoneDb>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let zones = Arc::new(ZoneDb::from_config(&config.scheduler));
        tracing::debug!(
            zones = zones.len(),
            restricted = config.scheduler.restrict_to_catalog,
            "timezone database loaded"
        );
        Self { config, zones }
    }
}
