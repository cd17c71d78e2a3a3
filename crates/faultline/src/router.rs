//! HTTP router configuration

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use faultline_api::paths::{self, ApiVersion};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::api::controllers::{v1, v2};
use crate::api::openapi::ApiDoc;
use crate::api::system;
use crate::api::translation::surface_unhandled;
use crate::state::AppState;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // System endpoints
        .route(paths::HEALTH, get(system::health))
        .route(paths::OPENAPI_JSON, get(system::openapi_json))
        .merge(Scalar::with_url(paths::DOCS, ApiDoc::openapi()))
        // Versioned handlers, each with its own translation layer
        .nest(&ApiVersion::V1.prefix(), v1::router(state.clone()))
        .nest(&ApiVersion::V2.prefix(), v2::router(state.clone()))
        // Boundary for failures no translator claimed
        .layer(middleware::map_response_with_state(
            state.clone(),
            surface_unhandled,
        ))
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
