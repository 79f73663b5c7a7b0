//! Router assembly: API routes plus the HTTP middleware stack.

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use jl_domain::config::{CorsConfig, RateLimitConfig};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::state::AppState;

/// Default for `JETLAG_MAX_CONCURRENT_REQUESTS`.
const DEFAULT_MAX_CONCURRENT: usize = 256;

/// Build the fully layered application.
///
/// Rate limiting keys on the peer address, so a router built with a
/// `[server.rate_limit]` section must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(state: AppState) -> anyhow::Result<Router> {
    let max_concurrent = std::env::var("JETLAG_MAX_CONCURRENT_REQUESTS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_CONCURRENT);
    tracing::info!(max_concurrent, "concurrency limit set");

    let mut app = api::router()
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(tower::limit::ConcurrencyLimitLayer::new(max_concurrent));

    match &state.config.server.rate_limit {
        Some(rl) => {
            app = app.layer(governor_layer(rl)?);
        }
        None => {
            tracing::info!("per-IP rate limiting disabled (no [server.rate_limit] in config)");
        }
    }

    Ok(app.with_state(state))
}

/// Per-IP token bucket via governor.
fn governor_layer(
    rl: &RateLimitConfig,
) -> anyhow::Result<
    tower_governor::GovernorLayer<
        tower_governor::key_extractor::PeerIpKeyExtractor,
        governor::middleware::NoOpMiddleware,
    >,
> {
    use tower_governor::governor::GovernorConfigBuilder;
    use tower_governor::GovernorLayer;

    let gov_config = GovernorConfigBuilder::default()
        .per_second(rl.requests_per_second)
        .burst_size(rl.burst_size)
        .finish()
        .context("rate_limit: requests_per_second and burst_size must be > 0")?;

    tracing::info!(
        requests_per_second = rl.requests_per_second,
        burst_size = rl.burst_size,
        "per-IP rate limiting enabled"
    );

    Ok(GovernorLayer {
        config: std::sync::Arc::new(gov_config),
    })
}

/// Build a [`CorsLayer`] from the configured allowed origins.
///
/// Origins may end in `:*` to match any port on that host.  A lone `"*"`
/// allows every origin.
pub fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    use axum::http::header;

    let methods = [Method::GET, Method::POST, Method::OPTIONS];

    if cors.allowed_origins.len() == 1 && cors.allowed_origins[0] == "*" {
        tracing::warn!("CORS configured with wildcard \"*\": all origins allowed");
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE]);
    }

    // Partition into exact origins and wildcard-port patterns.
    let mut exact: Vec<HeaderValue> = Vec::new();
    let mut wildcard_prefixes: Vec<String> = Vec::new();

    for origin in &cors.allowed_origins {
        if origin.ends_with(":*") {
            wildcard_prefixes.push(origin.trim_end_matches('*').to_owned());
        } else if let Ok(hv) = origin.parse::<HeaderValue>() {
            exact.push(hv);
        } else {
            tracing::warn!(origin = %origin, "invalid CORS origin, skipping");
        }
    }

    let allow_origin = if wildcard_prefixes.is_empty() {
        AllowOrigin::list(exact)
    } else {
        AllowOrigin::predicate(move |origin, _| {
            if exact.iter().any(|e| e.as_bytes() == origin.as_bytes()) {
                return true;
            }
            let origin_str = origin.to_str().unwrap_or("");
            wildcard_prefixes.iter().any(|prefix| {
                origin_str
                    .strip_prefix(prefix.as_str())
                    .map(|port| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
                    .unwrap_or(false)
            })
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(methods)
        .allow_headers([header::CONTENT_TYPE])
}
