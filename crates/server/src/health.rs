use axum::Json;
use serde::Serialize;
use std::sync::OnceLock;
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the application start time. Call once during startup.
pub fn record_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Base URL searches are forwarded to.
    pub upstream: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Health check handler. Does not contact the citation service; a search
/// needs a user token, so the upstream is only reported, not probed.
pub async fn health_check() -> Json<HealthResponse> {
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    Json(HealthResponse {
        status: "ok".to_string(),
        upstream: crate::config::app_config().nucleus.base_url.clone(),
        uptime_seconds: uptime,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Router exposing `/health`, merged next to the Dioxus app router.
pub fn health_router() -> axum::Router {
    axum::Router::new().route("/health", axum::routing::get(health_check))
}
