pub mod calculate;
pub mod meta;
pub mod timezones;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router.  All routes are public.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::root))
        .route("/timezones", get(timezones::list))
        .route("/calculate", post(calculate::calculate))
        .route("/v1/health", get(meta::health))
        .fallback(not_found)
}

async fn not_found() -> Response {
    api_error(StatusCode::NOT_FOUND, "no such endpoint")
}

/// Build a standardized JSON error response: `{ "error": "<message>" }`.
pub(crate) fn api_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}
