//! Document API integration tests
//!
//! Save, load and list through the HTTP surface.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{write_corrupt_document, write_raw_document, TestApp};

#[tokio::test]
async fn test_save_then_load() {
    let app = TestApp::new().await;

    let saved: Value = app
        .server
        .post("/api/save-document")
        .json(&json!({"id": "essay-1", "title": "Essay", "content": "It was a dark night."}))
        .await
        .json();
    assert_eq!(saved["success"], true);
    assert_eq!(saved["document"]["id"], "essay-1");

    let response = app.server.get("/api/load-document/essay-1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let loaded: Value = response.json();
    assert_eq!(loaded["success"], true);
    assert_eq!(loaded["document"]["title"], "Essay");
    assert_eq!(loaded["document"]["content"], "It was a dark night.");
    assert_eq!(loaded["document"], saved["document"]);
}

#[tokio::test]
async fn test_save_defaults_and_generated_id() {
    let app = TestApp::new().await;

    let body: Value = app.server.post("/api/save-document").json(&json!({})).await.json();
    let document = &body["document"];

    let id = document["id"].as_str().unwrap();
    assert_eq!(id.len(), 14);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(document["title"], "Untitled Document");
    assert_eq!(document["content"], "");
    assert_eq!(document["created_at"], document["updated_at"]);
    assert!(app.data_dir().join(format!("{id}.json")).is_file());
}

#[tokio::test]
async fn test_load_missing_document() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get("/api/load-document/does-not-exist")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body, json!({"success": false, "error": "Document not found"}));
}

#[tokio::test]
async fn test_save_rejects_path_like_id() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/save-document")
        .json(&json!({"id": "../outside", "content": "x"}))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid document id");
}

#[tokio::test]
async fn test_list_orders_by_updated_at_descending() {
    let app = TestApp::new().await;
    write_raw_document(&app.data_dir(), "first", "Older", "2024-01-01T00:00:00");
    write_raw_document(&app.data_dir(), "second", "Newer", "2024-01-02T00:00:00");

    let body: Value = app.server.get("/api/list-documents").await.json();

    assert_eq!(
        body,
        json!({
            "success": true,
            "documents": [
                {"id": "second", "title": "Newer", "created_at": "2024-01-02T00:00:00", "updated_at": "2024-01-02T00:00:00"},
                {"id": "first", "title": "Older", "created_at": "2024-01-01T00:00:00", "updated_at": "2024-01-01T00:00:00"}
            ]
        })
    );
}

#[tokio::test]
async fn test_list_omits_content() {
    let app = TestApp::new().await;
    app.server
        .post("/api/save-document")
        .json(&json!({"id": "a", "content": "secret body"}))
        .await;

    let body: Value = app.server.get("/api/list-documents").await.json();
    let documents = body["documents"].as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert!(documents[0].get("content").is_none());
}

#[tokio::test]
async fn test_list_fails_when_any_file_is_corrupt() {
    let app = TestApp::new().await;
    write_raw_document(&app.data_dir(), "ok", "Fine", "2024-01-01T00:00:00");
    write_corrupt_document(&app.data_dir(), "broken");

    let response = app.server.get("/api/list-documents").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_documents_survive_restart() {
    let app = TestApp::new().await;
    app.server
        .post("/api/save-document")
        .json(&json!({"id": "kept", "title": "Kept"}))
        .await;

    let app = TestApp::start(app.shutdown()).await;

    let loaded: Value = app.server.get("/api/load-document/kept").await.json();
    assert_eq!(loaded["document"]["title"], "Kept");
    let listed: Value = app.server.get("/api/list-documents").await.json();
    assert_eq!(listed["documents"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_with_empty_id_generates_one() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/save-document")
        .json(&json!({"id": "", "title": "Fresh"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let id = body["document"]["id"].as_str().unwrap();
    assert_eq!(id.len(), 14);
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_load_partial_file_is_server_error() {
    let app = TestApp::new().await;
    std::fs::write(
        app.data_dir().join("partial.json"),
        json!({"id": "partial", "title": "Only a title"}).to_string(),
    )
    .unwrap();

    let response = app
        .server
        .get("/api/load-document/partial")
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(body["success"], false);

    let listed: Value = app.server.get("/api/list-documents").await.json();
    assert_eq!(listed["documents"][0]["title"], "Only a title");
    assert_eq!(listed["documents"][0]["updated_at"], Value::Null);
}
