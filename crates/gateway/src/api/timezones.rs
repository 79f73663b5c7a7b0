//! `GET /timezones`: the built-in catalog of common zones.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use jl_scheduler::CATALOG;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct TimezonesResponse {
    /// IANA id -> display label.
    timezones: BTreeMap<&'static str, &'static str>,
    /// Number of identifiers `/calculate` accepts.
    supported_count: usize,
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let timezones = CATALOG
        .iter()
        .filter(|e| state.zones.contains(e.id))
        .map(|e| (e.id, e.label))
        .collect();
    Json(TimezonesResponse {
        timezones,
        supported_count: state.zones.len(),
    })
}
