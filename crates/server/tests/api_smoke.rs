//! Smoke tests for the HTTP API, driving the router in-process.
//!
//! The state here carries no credential, so every search resolves from
//! the curated catalog without touching the network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use eduseek_core::{Config, RetryPolicy, VideoSearchService};
use eduseek_server::api::create_router;
use eduseek_server::state::AppState;

fn demo_router() -> Router {
    let config = Config::default();
    let search = VideoSearchService::new(None, RetryPolicy::default());
    create_router(Arc::new(AppState::new(config, search)))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

#[tokio::test]
async fn health_reports_demo_mode() {
    let (status, json) = get(demo_router(), "/api/v1/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["live_search"], false);
}

#[tokio::test]
async fn search_always_answers_200_with_fallback() {
    let (status, json) = get(demo_router(), "/api/v1/videos/search?q=algebra").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["source"], "fallback");
    assert!(json["total_count"].as_u64().unwrap() > 0);
    assert!(json["diagnostic"].as_str().unwrap().contains("Demo mode"));
}

#[tokio::test]
async fn search_applies_facet_filters() {
    let (status, json) =
        get(demo_router(), "/api/v1/videos/search?subject=mathematics").await;

    assert_eq!(status, StatusCode::OK);
    let records = json["records"].as_array().unwrap();
    assert!(!records.is_empty());
    for record in records {
        assert_eq!(record["subject"], "mathematics");
    }
}

#[tokio::test]
async fn search_rejects_unknown_facet_values() {
    let (status, _) = get(demo_router(), "/api/v1/videos/search?subject=astrology").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_with_empty_query_still_returns_records() {
    let (status, json) = get(demo_router(), "/api/v1/videos/search").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["total_count"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn config_endpoint_redacts_the_credential() {
    let (status, json) = get(demo_router(), "/api/v1/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["video_search"]["api_key_configured"], false);
    assert!(json["video_search"].get("api_key").is_none());
}

#[tokio::test]
async fn metrics_endpoint_serves_prometheus_text() {
    let app = demo_router();

    // Drive one search first so the counters exist in the output.
    let _ = app
        .clone()
        .oneshot(
            Request::get("/api/v1/videos/search?q=physics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let response = app
        .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("eduseek_search_requests_total"));
}
