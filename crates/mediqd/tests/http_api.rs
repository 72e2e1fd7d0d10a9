//! HTTP boundary tests for the mediqd router.
//!
//! Exercises the four chat boundary cases (wrong method, missing message,
//! blank message, success) plus the health and departments surfaces, driving
//! the router directly with tower's oneshot.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mediqd::config::Config;
use mediqd::engine::TriageEngine;
use mediqd::knowledge::KnowledgeBase;
use mediqd::server::{app, AppState};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> axum::Router {
    let engine = TriageEngine::new(KnowledgeBase::new(), &Config::default());
    app(Arc::new(AppState::new(engine)))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_chat_is_405_with_json_body() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Method not allowed");
}

#[tokio::test]
async fn test_missing_message_is_400() {
    let response = test_app().oneshot(chat_request(r#"{}"#)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is required");
}

#[tokio::test]
async fn test_blank_message_is_400() {
    let response = test_app()
        .oneshot(chat_request(r#"{"message": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is required");
}

#[tokio::test]
async fn test_empty_string_message_is_400() {
    let response = test_app()
        .oneshot(chat_request(r#"{"message": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let response = test_app().oneshot(chat_request("not json")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_chat_success_shape_and_timestamp_format() {
    let response = test_app()
        .oneshot(chat_request(r#"{"message": "what are your opening hours"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let text = json["response"].as_str().unwrap();
    assert!(!text.is_empty());

    let timestamp = json["timestamp"].as_str().unwrap();
    chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
        .expect("timestamp must be YYYY-MM-DD HH:MM:SS");
}

#[tokio::test]
async fn test_chat_emergency_end_to_end() {
    let response = test_app()
        .oneshot(chat_request(
            r#"{"message": "I have severe chest pain and can't breathe"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let text = json["response"].as_str().unwrap();
    assert!(text.starts_with("This may be a medical emergency"));
    assert!(text.contains("Call Emergency"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["active_sessions"], 0);
    assert!(json["symptom_categories"].as_u64().unwrap() > 0);
    assert!(json["departments_known"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_departments_endpoint_lists_static_mapping() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/v1/departments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let mappings = json["departments"].as_array().unwrap();
    assert!(!mappings.is_empty());
    let respiratory = mappings
        .iter()
        .find(|m| m["category"] == "respiratory")
        .unwrap();
    assert_eq!(respiratory["departments"][0], "Pulmonology");
}
