use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// One request as seen by the mock citation service.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Value,
}

impl CapturedRequest {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<String>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// A throwaway citation service on an ephemeral local port.
///
/// Every request gets the same canned status and body, whatever the path.
pub struct MockNucleus {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockNucleus {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: Arc::new(body.into()),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(capture).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock listener");
        let addr = listener.local_addr().expect("Mock listener has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Mock answering 200 with `body` serialized as JSON.
    pub async fn ok_json(body: Value) -> Self {
        Self::start(StatusCode::OK, body.to_string()).await
    }

    pub fn client(&self) -> server::nucleus::CitationClient {
        server::nucleus::CitationClient::new(self.base_url.clone())
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().expect("Mock state poisoned").clone()
    }
}

async fn capture(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let body = serde_json::from_slice(&body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).to_string()));
    state
        .requests
        .lock()
        .expect("Mock state poisoned")
        .push(CapturedRequest {
            method,
            path: uri.path().to_string(),
            headers,
            body,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_ref().clone(),
    )
}

/// Send a request through a router and parse the JSON response.
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}

/// GET a route with no extra headers.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, req).await
}
