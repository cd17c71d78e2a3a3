//! Versioned handlers raising failures on request

use std::sync::Arc;

use axum::{Router, middleware};
use faultline_api::responses::{InnerSuccessResponse, SuccessResponse};
use faultline_core::TranslatorTable;

use crate::api::translation::{HandlerScope, translate_failures};
use crate::state::AppState;

pub mod v1;
pub mod v2;

pub use v1::ExceptionHandlingV1Controller;
pub use v2::ExceptionHandlingV2Controller;

/// Payload every endpoint answers with when it does not fail
pub fn success_payload() -> SuccessResponse {
    SuccessResponse::new(
        "give-me-success",
        InnerSuccessResponse::new("success name", vec!["one success value".to_string()]),
    )
}

/// Attach a handler's translation layer to its routes
fn with_translation(
    routes: Router<Arc<AppState>>,
    name: &'static str,
    translators: TranslatorTable,
    state: Arc<AppState>,
) -> Router<Arc<AppState>> {
    routes.layer(middleware::map_response_with_state(
        HandlerScope::new(name, translators, state),
        translate_failures,
    ))
}
