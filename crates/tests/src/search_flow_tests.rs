use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{map_citations, ResultType, SearchResult};

use crate::common::MockNucleus;

fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-05-08T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[tokio::test]
async fn test_keyword_to_results_scenario() {
    let mock = MockNucleus::ok_json(json!({
        "citiation": [
            { "uid": "c1", "text": "snippet", "document": { "documentName": "Doc A" } }
        ]
    }))
    .await;

    let citations = mock
        .client()
        .fetch_citations("reg filing", "abc123")
        .await
        .unwrap();
    let results = map_citations(&citations, fixed_now());

    assert_eq!(
        results,
        vec![SearchResult {
            id: "c1".into(),
            title: "Doc A".into(),
            result_type: ResultType::Cs,
            url: "#".into(),
            summary: Some("snippet".into()),
            status: None,
            created_date: fixed_now(),
            application: "Nucleus API".into(),
            text: Some("snippet".into()),
            document_name: Some("Doc A".into()),
            internal_reference: false,
        }]
    );
}

#[tokio::test]
async fn test_sparse_records_get_positional_fallbacks() {
    let mock = MockNucleus::ok_json(json!({
        "citiation": [
            { "uid": "a", "document": { "documentName": "Named" } },
            { "document": null },
            { "uid": "", "referenceUrl": "", "document": { "documentName": "" } },
            { "referenceUrl": "https://docs.example.com/d" }
        ]
    }))
    .await;

    let citations = mock.client().fetch_citations("kyc", "tok").await.unwrap();
    let results = map_citations(&citations, fixed_now());

    let summary: Vec<(&str, &str, &str)> = results
        .iter()
        .map(|r| (r.id.as_str(), r.title.as_str(), r.url.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", "Named", "#"),
            ("citation-1", "Document 2", "#"),
            ("citation-2", "Document 3", "#"),
            ("citation-3", "Document 4", "https://docs.example.com/d"),
        ]
    );
}

#[tokio::test]
async fn test_results_serialize_for_the_client() {
    let mock = MockNucleus::ok_json(json!({ "citiation": [{ "uid": "c1" }] })).await;

    let citations = mock.client().fetch_citations("kyc", "tok").await.unwrap();
    let value = serde_json::to_value(map_citations(&citations, fixed_now())).unwrap();

    assert_eq!(value[0]["result_type"], "cs");
    assert_eq!(value[0]["application"], "Nucleus API");
    assert_eq!(value[0]["created_date"], "2025-05-08T09:30:00Z");
    assert!(value[0].get("summary").is_none());
}
