use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_health_reports_ok() {
    server::health::record_start_time();
    let app = server::health::health_router();

    let (status, body) = common::get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert!(body["upstream"]
        .as_str()
        .is_some_and(|u| u.starts_with("http")));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = server::health::health_router();
    let (status, _) = common::get(&app, "/healthz").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
