//! Assistant API integration tests
//!
//! Chat, grammar, style and idea endpoints.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::TestApp;

#[tokio::test]
async fn test_chat_keyword_reply() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({"message": "Can you check my Spelling?", "context": "draft"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    crate::assert_contains!(body["response"].as_str().unwrap(), "grammar and spelling");
}

#[tokio::test]
async fn test_chat_fallback_echoes_message() {
    let app = TestApp::new().await;

    let body: Value = app
        .server
        .post("/api/chat")
        .json(&json!({"message": "Tell me about dragons"}))
        .await
        .json();

    crate::assert_contains!(
        body["response"].as_str().unwrap(),
        "asking about 'Tell me about dragons'"
    );
}

#[tokio::test]
async fn test_check_grammar_double_space() {
    let app = TestApp::new().await;

    let body: Value = app
        .server
        .post("/api/check-grammar")
        .json(&json!({"text": "a  b"}))
        .await
        .json();

    assert_eq!(
        body,
        json!({
            "success": true,
            "issues": [{"type": "formatting", "message": "Double spaces detected", "position": 1}],
            "suggestions": ["Remove extra spaces for better formatting."]
        })
    );
}

#[tokio::test]
async fn test_check_grammar_clean_text() {
    let app = TestApp::new().await;

    let body: Value = app
        .server
        .post("/api/check-grammar")
        .json(&json!({"text": "a b"}))
        .await
        .json();

    assert_eq!(body["issues"], json!([]));
    assert_eq!(body["suggestions"], json!([]));
}

#[tokio::test]
async fn test_improve_style_long_sentence() {
    let app = TestApp::new().await;
    let text = format!("{}. Fine.", "x".repeat(150));

    let body: Value = app
        .server
        .post("/api/improve-style")
        .json(&json!({"text": &text}))
        .await
        .json();

    assert_eq!(
        body["suggestions"],
        json!(["Consider breaking up long sentences for better readability."])
    );
    assert_eq!(body["improved_text"], json!(text));
}

#[tokio::test]
async fn test_generate_ideas_with_and_without_topic() {
    let app = TestApp::new().await;

    let body: Value = app
        .server
        .post("/api/generate-ideas")
        .json(&json!({"context": "", "topic": "forests"}))
        .await
        .json();
    let ideas = body["ideas"].as_array().unwrap();
    assert_eq!(ideas.len(), 3);
    assert!(ideas.iter().all(|idea| idea.as_str().unwrap().contains("forests")));

    let body: Value = app
        .server
        .post("/api/generate-ideas")
        .json(&json!({"topic": ""}))
        .await
        .json();
    assert_eq!(body["ideas"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    let app = TestApp::new().await;

    let body: Value = app.server.post("/api/check-grammar").json(&json!({})).await.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["issues"], json!([]));
}

#[tokio::test]
async fn test_null_fields_are_treated_as_empty() {
    let app = TestApp::new().await;

    let response = app
        .server
        .post("/api/generate-ideas")
        .json(&json!({"context": null, "topic": null}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["ideas"].as_array().unwrap().len(), 4);

    let response = app
        .server
        .post("/api/chat")
        .json(&json!({"message": "hello", "context": null}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    crate::assert_contains!(body["response"].as_str().unwrap(), "writing assistant");

    let response = app
        .server
        .post("/api/check-grammar")
        .json(&json!({"text": null}))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["issues"], json!([]));
}
