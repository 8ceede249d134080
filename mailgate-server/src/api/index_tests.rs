use axum::extract::State;
use axum::http::StatusCode;

use mailgate_types::{CredentialPolicy, IndexMode};

use super::index::{get_index, index_doc, render_landing};
use crate::test_helpers::test_app_state;

#[test]
fn test_index_doc_lists_every_route() {
    let doc = index_doc(CredentialPolicy::Static);
    assert_eq!(doc.name, "mailgate");
    assert_eq!(doc.endpoints.len(), 8);
    assert!(doc.endpoints.iter().all(|e| e.method == "GET"));
    assert!(doc.endpoints.iter().any(|e| e.path == "/api/public/v1/lsv/{type}/{id}"));
}

#[test]
fn test_index_doc_serializes_policy() {
    let value = serde_json::to_value(index_doc(CredentialPolicy::PerRequest)).unwrap();
    assert_eq!(value["credential_policy"], "per_request");
    assert!(value["authentication"].as_str().unwrap().contains("X-API-Key"));
    assert_eq!(value["endpoints"][0]["path"], "/api/public/v1/me");
}

#[test]
fn test_landing_page_is_fully_rendered() {
    let html = render_landing(CredentialPolicy::Static);
    assert!(html.contains("<code>/api/public/v1/letters/{id}</code>"));
    assert!(html.contains(env!("CARGO_PKG_VERSION")));
    assert!(!html.contains("{{"), "unreplaced placeholder in landing page");
}

#[tokio::test]
async fn test_get_index_respects_mode() {
    let state = test_app_state("http://127.0.0.1:1", CredentialPolicy::Static, IndexMode::Docs);
    let response = get_index(State(state)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let state = test_app_state("http://127.0.0.1:1", CredentialPolicy::Static, IndexMode::Landing);
    let response = get_index(State(state)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/html")));
}
