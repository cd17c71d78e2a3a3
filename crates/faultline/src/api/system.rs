//! System endpoints

use std::sync::Arc;

use axum::{Json, extract::State};
use faultline_api::responses::HealthResponse;
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;
use crate::state::AppState;

/// Daemon health
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Daemon is up", body = HealthResponse))
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
    })
}

/// Generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
