use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use finboard::api::router::create_router;
use finboard::build_state;
use finboard::config::AppConfig;
use finboard::metrics::init_metrics;

/// Build a router backed by freshly seeded in-memory stores.
#[allow(dead_code)]
pub async fn build_test_app() -> Router {
    let config = AppConfig {
        host: "127.0.0.1".into(),
        port: 0,
        base_currency: "USD".into(),
        demo_user_id: "demo".into(),
        seed_demo_data: true,
    };

    let metrics_handle = init_metrics();
    let state = build_state(config, metrics_handle)
        .await
        .expect("Failed to build test state");
    create_router(state)
}

/// Issue a GET request and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

/// Issue a request carrying a JSON body and decode the JSON response.
#[allow(dead_code)]
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}
