//! `POST /calculate`: compute a sleep schedule.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jl_scheduler::{calculate_schedule, ScheduleRequest, ValidationError};

use super::api_error;
use crate::state::AppState;

pub async fn calculate(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return api_error(rejection.status(), rejection.body_text()),
    };
    match calculate_schedule(&state.zones, &state.config.scheduler, &req) {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::debug!(field = %e.field(), error = %e, "schedule request rejected");
            validation_error(&e)
        }
    }
}

/// `400 { "error", "field", "kind" }`.
fn validation_error(e: &ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({
            "error": e.to_string(),
            "field": e.field(),
            "kind": e.kind(),
        })),
    )
        .into_response()
}
