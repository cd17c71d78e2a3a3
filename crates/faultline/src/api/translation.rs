//! Failure translation layers
//!
//! Handlers answer a failure with a [`RaisedFailure`] placeholder. Each
//! handler router carries a layer that resolves it against that handler's
//! own translators and then the global ones; whatever is left reaches the
//! boundary layer on the application router and becomes a generic error.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use faultline_core::{FailureKind, Resolution, SourceClassTranslator, TranslatorTable, resolve};

use crate::api::error::{AppError, RaisedFailure};
use crate::state::AppState;

/// Response header naming the scope that translated a failure
pub const TRANSLATED_BY_HEADER: &str = "x-faultline-translated-by";

/// Translators applied to failures raised by any handler
pub fn global_translators() -> TranslatorTable {
    TranslatorTable::new().with(FailureKind::HandledGlobally, SourceClassTranslator)
}

/// State of a handler router's translation layer
#[derive(Debug, Clone)]
pub struct HandlerScope {
    pub name: &'static str,
    pub translators: Arc<TranslatorTable>,
    pub app: Arc<AppState>,
}

impl HandlerScope {
    pub fn new(name: &'static str, translators: TranslatorTable, app: Arc<AppState>) -> Self {
        Self {
            name,
            translators: Arc::new(translators),
            app,
        }
    }
}

/// Resolve a raised failure against the handler's table, then the global one
pub async fn translate_failures(
    State(scope): State<HandlerScope>,
    mut response: Response,
) -> Response {
    let Some(RaisedFailure(failure)) = response.extensions_mut().remove::<RaisedFailure>() else {
        return response;
    };

    let scoped = (!scope.translators.is_empty()).then_some(scope.translators.as_ref());
    match resolve(scoped, &scope.app.global, failure) {
        Resolution::Translated { payload, scope: translated_by } => {
            tracing::debug!(
                handler = scope.name,
                scope = %translated_by,
                source_class = %payload.source_class,
                "answering with translated failure"
            );
            let mut response = (scope.app.translated_status, Json(payload)).into_response();
            response.headers_mut().insert(
                TRANSLATED_BY_HEADER,
                HeaderValue::from_static(translated_by.as_str()),
            );
            response
        }
        Resolution::Unhandled(failure) => {
            response.extensions_mut().insert(RaisedFailure(failure));
            response
        }
    }
}

/// Turn any failure that escaped translation into a generic error
pub async fn surface_unhandled(
    State(state): State<Arc<AppState>>,
    mut response: Response,
) -> Response {
    let Some(RaisedFailure(failure)) = response.extensions_mut().remove::<RaisedFailure>() else {
        return response;
    };

    tracing::error!(
        kind = %failure.kind(),
        message = failure.message(),
        property = failure.property(),
        "untranslated failure"
    );
    AppError::unhandled(state.unhandled_status).into_response()
}

#[cfg(test)]
mod tests {
    use faultline_core::Failure;

    use super::*;
    use crate::config::Config;

    fn app_state() -> Arc<AppState> {
        Arc::new(AppState::new(Config::default()).unwrap())
    }

    #[test]
    fn test_global_table() {
        let table = global_translators();
        assert!(table.handles(FailureKind::HandledGlobally));
        assert!(!table.handles(FailureKind::Handled));
        assert!(!table.handles(FailureKind::Unhandled));
    }

    #[tokio::test]
    async fn test_passes_through_plain_responses() {
        let scope = HandlerScope::new("test", TranslatorTable::new(), app_state());
        let response = translate_failures(State(scope), "ok".into_response()).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert!(response.headers().get(TRANSLATED_BY_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_leaves_unclaimed_failures_for_the_boundary() {
        let scope = HandlerScope::new("test", TranslatorTable::new(), app_state());
        let raised = RaisedFailure(Failure::handled("m", "s")).into_response();

        let response = translate_failures(State(scope), raised).await;
        assert!(response.extensions().get::<RaisedFailure>().is_some());

        let response = surface_unhandled(State(app_state()), response).await;
        assert_eq!(
            response.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(response.extensions().get::<RaisedFailure>().is_none());
    }
}
