use std::sync::Arc;

use faultline::api::controllers::{ExceptionHandlingV1Controller, ExceptionHandlingV2Controller};
use faultline::{AppState, Config, create_router};
use faultline_api::paths::{self, ApiVersion};
use faultline_api::requests::ThrowQuery;
use faultline_api::responses::EndpointResponse;
use faultline_client::{ClientError, HttpClient};
use tokio::net::TcpListener;

/// Serve the daemon router on an ephemeral port
async fn spawn_daemon() -> HttpClient {
    let state = Arc::new(AppState::new(Config::default()).unwrap());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    HttpClient::new(format!("http://{addr}")).unwrap()
}

#[tokio::test]
async fn test_health() {
    let client = spawn_daemon().await;
    let health = client.health().await.unwrap();
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_success() {
    let client = spawn_daemon().await;
    for version in ApiVersion::ALL {
        let payload = client.success(version).await.unwrap();
        assert_eq!(payload.name, "give-me-success");
        assert_eq!(payload.data.unwrap().values[0], "one success value");
        assert!(payload.properties.is_none());
    }
}

#[tokio::test]
async fn test_translated_failures() {
    let client = spawn_daemon().await;

    match client.handled(ApiVersion::V1, true).await.unwrap() {
        EndpointResponse::Error(error) => {
            assert_eq!(error.message, "ExceptionHandlingV1Controller#HandledException occurs :: ");
            assert_eq!(error.source_class, ExceptionHandlingV1Controller::TYPE_NAME);
        }
        EndpointResponse::Success(_) => panic!("expected translated failure"),
    }

    match client.handled_globally(ApiVersion::V2, true).await.unwrap() {
        EndpointResponse::Error(error) => {
            assert_eq!(
                error.message,
                "ExceptionHandlingV2Controller#HandledGloballyException occurs :: "
            );
            assert_eq!(error.source_class, ExceptionHandlingV2Controller::TYPE_NAME);
        }
        EndpointResponse::Success(_) => panic!("expected translated failure"),
    }
}

#[tokio::test]
async fn test_untranslated_failures_are_api_errors() {
    let client = spawn_daemon().await;

    let err = client.handled(ApiVersion::V2, true).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert!(!err.to_string().contains("should handle it"));

    let err = client.unhandled(ApiVersion::V1, true).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_flag_false_succeeds() {
    let client = spawn_daemon().await;

    let response = client.unhandled(ApiVersion::V1, false).await.unwrap();
    assert!(!response.is_error());

    let query = ThrowQuery {
        is_throw_exception: Some("nope".to_string()),
    };
    let response = client
        .call(ApiVersion::V2, paths::GIVE_ME_HANDLED_EXCEPTION, &query)
        .await
        .unwrap();
    assert!(!response.is_error());
}
