//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sized_cache::{api::create_router, AppState, ByteLenSizer, Config, LruCache};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(max_size: usize) -> Router {
    let cache = LruCache::new(max_size, ByteLenSizer).unwrap();
    create_router(AppState::new(cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// == SET Endpoint Tests ==

#[tokio::test]
async fn test_set_endpoint_success() {
    let app = create_test_app(1024);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"key":"img1","variant":"small","value":"pixels"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["stored"], Value::Bool(true));
    assert!(json["message"].as_str().unwrap().contains("img1"));
}

#[tokio::test]
async fn test_set_oversized_value_reports_not_stored() {
    let app = create_test_app(8);

    let (status, json) = send(
        &app,
        "PUT",
        "/set",
        Some(r#"{"key":"img1","value":"far too large for the budget"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["stored"], Value::Bool(false));

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["puts"], 0);
    assert_eq!(stats["size"], 0);
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app(1024);

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/set")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"key": "#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_empty_key_request() {
    let app = create_test_app(1024);

    let (status, json) = send(&app, "PUT", "/set", Some(r#"{"key":"","value":"v"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("empty"));
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app(1024);

    send(
        &app,
        "PUT",
        "/set",
        Some(r#"{"key":"img1","variant":"large","value":"big pixels"}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/get/img1?variant=large", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["key"], "img1");
    assert_eq!(json["variant"], "large");
    assert_eq!(json["value"], "big pixels");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app(1024);

    let (status, json) = send(&app, "GET", "/get/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

// == Eviction Tests ==

#[tokio::test]
async fn test_lru_eviction_via_api() {
    let app = create_test_app(10);

    send(&app, "PUT", "/set", Some(r#"{"key":"a","value":"aaaa"}"#)).await;
    send(&app, "PUT", "/set", Some(r#"{"key":"b","value":"bbbb"}"#)).await;
    let (status, _) = send(&app, "GET", "/get/a", None).await;
    assert_eq!(status, StatusCode::OK);
    send(&app, "PUT", "/set", Some(r#"{"key":"c","value":"cccc"}"#)).await;

    let (status_a, _) = send(&app, "GET", "/get/a", None).await;
    let (status_b, _) = send(&app, "GET", "/get/b", None).await;
    let (status_c, _) = send(&app, "GET", "/get/c", None).await;
    assert_eq!(status_a, StatusCode::OK);
    assert_eq!(status_b, StatusCode::NOT_FOUND);
    assert_eq!(status_c, StatusCode::OK);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["evictions"], 1);
    assert_eq!(stats["size"], 8);
    assert_eq!(stats["max_size"], 10);
}

// == Prefix Endpoint Tests ==

#[tokio::test]
async fn test_clear_prefix_endpoint() {
    let app = create_test_app(1024);

    for body in [
        r#"{"key":"img1","variant":"small","value":"s"}"#,
        r#"{"key":"img1","variant":"large","value":"llll"}"#,
        r#"{"key":"img10","variant":"small","value":"tt"}"#,
    ] {
        send(&app, "PUT", "/set", Some(body)).await;
    }

    let (status, json) = send(&app, "DELETE", "/prefix/img1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["removed"], 2);

    let (status, _) = send(&app, "GET", "/get/img1?variant=small", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, "GET", "/get/img10?variant=small", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["size"], 2);
    assert_eq!(stats["evictions"], 0);
}

// == Clear Endpoint Tests ==

#[tokio::test]
async fn test_clear_endpoint_twice() {
    let app = create_test_app(1024);

    send(&app, "PUT", "/set", Some(r#"{"key":"a","value":"aaaa"}"#)).await;

    let (status, _) = send(&app, "POST", "/clear", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/clear", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["size"], 0);
    assert_eq!(stats["entries"], 0);
    assert_eq!(stats["evictions"], 1);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(1024);

    send(&app, "PUT", "/set", Some(r#"{"key":"hit","value":"v"}"#)).await;
    send(&app, "GET", "/get/hit", None).await;
    send(&app, "GET", "/get/miss", None).await;

    let (status, json) = send(&app, "GET", "/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["puts"], 1);
    assert_eq!(json["entries"], 1);
    assert_eq!(json["hit_rate"].as_f64().unwrap(), 0.5);
}

#[tokio::test]
async fn test_disabled_cache_never_hits() {
    let config = Config {
        cache_enabled: false,
        ..Config::default()
    };
    let app = create_router(AppState::from_config(&config).unwrap());

    send(&app, "PUT", "/set", Some(r#"{"key":"a","value":"aaaa"}"#)).await;
    let (status, _) = send(&app, "GET", "/get/a", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["max_size"], 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(1024);

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
