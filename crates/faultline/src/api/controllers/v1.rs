//! `/exception-handling/v1` handler
//!
//! Owns a scoped translator for [`FailureKind::Handled`], so its handled
//! failures come back as structured payloads.

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use faultline_api::paths;
use faultline_api::responses::{EndpointResponse, SuccessResponse};
use faultline_core::{Failure, FailureKind, SourceClassTranslator, TranslatorTable};

use super::{success_payload, with_translation};
use crate::api::error::{ApiError, RaisedFailure};
use crate::api::extract::ThrowFlag;
use crate::state::AppState;

pub struct ExceptionHandlingV1Controller;

impl ExceptionHandlingV1Controller {
    pub const NAME: &'static str = "ExceptionHandlingV1Controller";
    /// Fully-qualified type name, reported as the failure source
    pub const TYPE_NAME: &'static str = concat!(module_path!(), "::ExceptionHandlingV1Controller");

    /// Translators bound to this handler only
    pub fn translators() -> TranslatorTable {
        TranslatorTable::new().with(FailureKind::Handled, SourceClassTranslator)
    }

    pub fn give_me_success() -> SuccessResponse {
        success_payload()
    }

    /// # Errors
    /// Fails with [`Failure::Handled`] when `throw` is set
    pub fn give_me_handled_exception(throw: bool) -> Result<SuccessResponse, Failure> {
        if throw {
            return Err(Failure::handled(
                format!("{}#HandledException occurs :: ", Self::NAME),
                Self::TYPE_NAME,
            ));
        }
        Ok(success_payload())
    }

    /// # Errors
    /// Fails with [`Failure::HandledGlobally`] when `throw` is set
    pub fn give_me_handled_globally_exception(throw: bool) -> Result<SuccessResponse, Failure> {
        if throw {
            return Err(Failure::handled_globally(
                format!("{}#HandledGloballyException occurs :: ", Self::NAME),
                Self::TYPE_NAME,
            ));
        }
        Ok(success_payload())
    }

    /// # Errors
    /// Fails with [`Failure::Unhandled`] when `throw` is set
    pub fn give_me_unhandled_exception(throw: bool) -> Result<SuccessResponse, Failure> {
        if throw {
            return Err(Failure::unhandled(
                format!("{}#UnhandledException occurs ::", Self::NAME),
                format!("{} should not handle it!", Self::NAME),
            ));
        }
        Ok(success_payload())
    }
}

/// Routes mounted under the v1 prefix
pub fn router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let routes = Router::new()
        .route(paths::GIVE_ME_SUCCESS, get(give_me_success))
        .route(paths::GIVE_ME_HANDLED_EXCEPTION, get(give_me_handled_exception))
        .route(
            paths::GIVE_ME_HANDLED_GLOBALLY_EXCEPTION,
            get(give_me_handled_globally_exception),
        )
        .route(paths::GIVE_ME_UNHANDLED_EXCEPTION, get(give_me_unhandled_exception));

    with_translation(
        routes,
        ExceptionHandlingV1Controller::NAME,
        ExceptionHandlingV1Controller::translators(),
        state,
    )
}

/// Always succeeds
#[utoipa::path(
    get,
    path = "/exception-handling/v1/give-me-success",
    operation_id = "v1_give_me_success",
    tag = "v1",
    responses((status = 200, description = "Fixed success payload", body = SuccessResponse))
)]
pub async fn give_me_success() -> Json<SuccessResponse> {
    Json(ExceptionHandlingV1Controller::give_me_success())
}

/// Raises a failure translated by this handler
#[utoipa::path(
    get,
    path = "/exception-handling/v1/give-me-handled-exception",
    operation_id = "v1_give_me_handled_exception",
    tag = "v1",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Success or translated failure", body = EndpointResponse)
    )
)]
pub async fn give_me_handled_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV1Controller::give_me_handled_exception(throw)?))
}

/// Raises a failure translated by the global translators
#[utoipa::path(
    get,
    path = "/exception-handling/v1/give-me-handled-globally-exception",
    operation_id = "v1_give_me_handled_globally_exception",
    tag = "v1",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Success or translated failure", body = EndpointResponse)
    )
)]
pub async fn give_me_handled_globally_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV1Controller::give_me_handled_globally_exception(throw)?))
}

/// Raises a failure nothing translates
#[utoipa::path(
    get,
    path = "/exception-handling/v1/give-me-unhandled-exception",
    operation_id = "v1_give_me_unhandled_exception",
    tag = "v1",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Fixed success payload", body = SuccessResponse),
        (status = 500, description = "Untranslated failure", body = ApiError)
    )
)]
pub async fn give_me_unhandled_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV1Controller::give_me_unhandled_exception(throw)?))
}
