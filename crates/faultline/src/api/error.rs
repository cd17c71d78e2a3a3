//! API error types

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use faultline_core::Failure;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API error response
///
/// Never carries the message or property of the failure behind it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code
    pub code: String,
    /// Error message
    pub message: String,
}

impl ApiError {
    /// Body for a failure that no translator claimed
    pub fn unhandled() -> Self {
        Self {
            code: "UNHANDLED_FAILURE".to_string(),
            message: "request failed".to_string(),
        }
    }
}

/// Wrapper for API errors with status codes
pub struct AppError {
    pub status: StatusCode,
    pub error: ApiError,
}

impl AppError {
    pub fn unhandled(status: StatusCode) -> Self {
        Self {
            status,
            error: ApiError::unhandled(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// A failure raised by a handler, awaiting translation
///
/// Its response is a bodyless 500 that carries the failure in its
/// extensions; the translation layers replace it.
#[derive(Debug, Clone)]
pub struct RaisedFailure(pub Failure);

impl From<Failure> for RaisedFailure {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl IntoResponse for RaisedFailure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self);
        response
    }
}
