//! `/exception-handling/v2` handler
//!
//! Registers no translators of its own. Its handled failures therefore
//! escape to the boundary, while globally handled ones are still translated.

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use faultline_api::paths;
use faultline_api::responses::{EndpointResponse, SuccessResponse};
use faultline_core::{Failure, TranslatorTable};

use super::{success_payload, with_translation};
use crate::api::controllers::ExceptionHandlingV1Controller;
use crate::api::error::{ApiError, RaisedFailure};
use crate::api::extract::ThrowFlag;
use crate::state::AppState;

pub struct ExceptionHandlingV2Controller;

impl ExceptionHandlingV2Controller {
    pub const NAME: &'static str = "ExceptionHandlingV2Controller";
    /// Fully-qualified type name, reported as the failure source
    pub const TYPE_NAME: &'static str = concat!(module_path!(), "::ExceptionHandlingV2Controller");

    pub fn translators() -> TranslatorTable {
        TranslatorTable::new()
    }

    pub fn give_me_success() -> SuccessResponse {
        success_payload()
    }

    /// Raises the kind only v1 translates, naming v1 as the expected owner
    ///
    /// # Errors
    /// Fails with [`Failure::Handled`] when `throw` is set
    pub fn give_me_handled_exception(throw: bool) -> Result<SuccessResponse, Failure> {
        if throw {
            return Err(Failure::handled(
                format!("{}#HandledException occurs :: ", Self::NAME),
                format!("{} should handle it!", ExceptionHandlingV1Controller::NAME),
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

/// Routes mounted under the v2 prefix
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
        ExceptionHandlingV2Controller::NAME,
        ExceptionHandlingV2Controller::translators(),
        state,
    )
}

#[utoipa::path(
    get,
    path = "/exception-handling/v2/give-me-success",
    operation_id = "v2_give_me_success",
    tag = "v2",
    responses((status = 200, description = "Fixed success payload", body = SuccessResponse))
)]
pub async fn give_me_success() -> Json<SuccessResponse> {
    Json(ExceptionHandlingV2Controller::give_me_success())
}

/// Raises a failure no translator in scope claims
#[utoipa::path(
    get,
    path = "/exception-handling/v2/give-me-handled-exception",
    operation_id = "v2_give_me_handled_exception",
    tag = "v2",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Fixed success payload", body = SuccessResponse),
        (status = 500, description = "Untranslated failure", body = ApiError)
    )
)]
pub async fn give_me_handled_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV2Controller::give_me_handled_exception(throw)?))
}

#[utoipa::path(
    get,
    path = "/exception-handling/v2/give-me-handled-globally-exception",
    operation_id = "v2_give_me_handled_globally_exception",
    tag = "v2",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Success or translated failure", body = EndpointResponse)
    )
)]
pub async fn give_me_handled_globally_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV2Controller::give_me_handled_globally_exception(throw)?))
}

#[utoipa::path(
    get,
    path = "/exception-handling/v2/give-me-unhandled-exception",
    operation_id = "v2_give_me_unhandled_exception",
    tag = "v2",
    params(("isThrowException" = Option<String>, Query, description = "Fail when \"true\", case-insensitive")),
    responses(
        (status = 200, description = "Fixed success payload", body = SuccessResponse),
        (status = 500, description = "Untranslated failure", body = ApiError)
    )
)]
pub async fn give_me_unhandled_exception(
    ThrowFlag(throw): ThrowFlag,
) -> Result<Json<SuccessResponse>, RaisedFailure> {
    Ok(Json(ExceptionHandlingV2Controller::give_me_unhandled_exception(throw)?))
}
