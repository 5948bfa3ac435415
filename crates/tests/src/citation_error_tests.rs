use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use server::error_convert::{AppErrorExt, CitationErrorExt};
use shared_types::{AppError, AppErrorKind};

use crate::common::MockNucleus;

async fn failing_call(status: StatusCode, body: &str) -> AppError {
    let mock = MockNucleus::start(status, body).await;
    mock.client()
        .fetch_citations("kyc", "tok")
        .await
        .unwrap_err()
        .into_app_error()
}

#[tokio::test]
async fn test_rejected_token_maps_to_unauthorized() {
    for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
        let err = failing_call(status, "no").await;
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.status_code_u16(), 401);
    }
}

#[tokio::test]
async fn test_other_failures_map_to_upstream() {
    let err = failing_call(StatusCode::BAD_GATEWAY, "down").await;
    assert_eq!(err.kind, AppErrorKind::UpstreamError);
    assert!(err.message.contains("502"), "{}", err.message);

    let err = failing_call(StatusCode::OK, "not json").await;
    assert_eq!(err.kind, AppErrorKind::UpstreamError);
    assert_eq!(err.status_code_u16(), 502);
}

#[tokio::test]
async fn test_app_error_survives_server_fn_round_trip() {
    let err = failing_call(StatusCode::FORBIDDEN, "no").await;
    let expected = err.clone();

    let wire = err.into_server_fn_error().to_string();
    let parsed = AppError::from_server_error(&wire).unwrap();

    assert_eq!(parsed, expected);
}
