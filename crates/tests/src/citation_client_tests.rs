use axum::http::{header, Method, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;
use server::nucleus::CitationError;
use shared_types::CITATION_STREAM_PATH;

use crate::common::MockNucleus;

#[tokio::test]
async fn test_request_shape_and_headers() {
    let mock = MockNucleus::ok_json(json!({ "citiation": [] })).await;

    mock.client()
        .fetch_citations("reg filing", "abc123")
        .await
        .unwrap();

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method, Method::POST);
    assert_eq!(req.path, CITATION_STREAM_PATH);
    assert_eq!(req.header(header::AUTHORIZATION), Some("Bearer abc123"));
    assert_eq!(req.header(header::ACCEPT), Some("application/json"));
    assert_eq!(req.header(header::CONTENT_TYPE), Some("application/json"));
    assert_eq!(
        req.body,
        json!({
            "history": [{ "role": "user", "content": "reg filing" }],
            "queryMessages": [{ "role": "user", "content": "reg filing" }],
            "documentPhrase": null,
            "documentIdList": null,
            "documentLabels": null
        })
    );
}

#[tokio::test]
async fn test_token_is_forwarded_verbatim() {
    let mock = MockNucleus::ok_json(json!({})).await;

    mock.client().fetch_citations("kyc", " tok en").await.unwrap();

    assert_eq!(
        mock.requests()[0].header(header::AUTHORIZATION),
        Some("Bearer  tok en")
    );
}

#[tokio::test]
async fn test_citations_are_returned_in_order() {
    let mock = MockNucleus::ok_json(json!({
        "answer": "ignored",
        "citiation": [
            { "uid": "c1", "text": "first", "document": { "documentName": "Doc A" } },
            { "uid": "c2", "referenceUrl": "https://docs.example.com/b", "internalReference": true },
            {}
        ]
    }))
    .await;

    let citations = mock.client().fetch_citations("aml", "tok").await.unwrap();

    let uids: Vec<Option<&str>> = citations.iter().map(|c| c.uid.as_deref()).collect();
    assert_eq!(uids, vec![Some("c1"), Some("c2"), None]);
    assert_eq!(citations[0].document_name(), Some("Doc A"));
    assert!(citations[1].is_internal());
}

#[tokio::test]
async fn test_missing_or_null_list_is_empty() {
    for body in [json!({}), json!({ "citiation": null }), json!({ "citations": [{ "uid": "x" }] })] {
        let mock = MockNucleus::ok_json(body.clone()).await;
        let citations = mock.client().fetch_citations("kyc", "tok").await.unwrap();
        assert!(citations.is_empty(), "expected no citations for {body}");
    }
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let mock = MockNucleus::start(StatusCode::UNAUTHORIZED, r#"{"error":"token expired"}"#).await;

    let err = mock
        .client()
        .fetch_citations("kyc", "stale")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        CitationError::Status {
            status: 401,
            body: r#"{"error":"token expired"}"#.to_string(),
        }
    );
    assert_eq!(mock.requests().len(), 1, "failed requests are not retried");
}

#[tokio::test]
async fn test_server_error_is_an_error() {
    let mock = MockNucleus::start(StatusCode::INTERNAL_SERVER_ERROR, "boom").await;

    let err = mock.client().fetch_citations("kyc", "tok").await.unwrap_err();

    assert!(matches!(err, CitationError::Status { status: 500, .. }), "got {err:?}");
}

#[tokio::test]
async fn test_undecodable_body_is_a_parse_error() {
    for body in ["<html>gateway</html>", r#"{"citiation":"nope"}"#, ""] {
        let mock = MockNucleus::start(StatusCode::OK, body).await;
        let err = mock.client().fetch_citations("kyc", "tok").await.unwrap_err();
        assert!(matches!(err, CitationError::Parse(_)), "body {body:?} gave {err:?}");
    }
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_ignored() {
    let mock = MockNucleus::ok_json(json!({})).await;
    let client = server::nucleus::CitationClient::new(format!("{}/", mock.base_url));

    client.fetch_citations("kyc", "tok").await.unwrap();

    assert_eq!(mock.requests()[0].path, CITATION_STREAM_PATH);
}

#[tokio::test]
async fn test_custom_http_client_is_used() {
    let mock = MockNucleus::ok_json(json!({ "citiation": [{ "uid": "c1" }] })).await;
    let http = reqwest::Client::builder()
        .user_agent("insight-search-tests")
        .build()
        .unwrap();
    let client = server::nucleus::CitationClient::with_http(http, mock.base_url.clone());

    let citations = client.fetch_citations("kyc", "tok").await.unwrap();

    assert_eq!(citations.len(), 1);
    assert_eq!(
        mock.requests()[0].header(header::USER_AGENT),
        Some("insight-search-tests")
    );
}
