mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{build_test_app, get_json, send_json};

async fn delete_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
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

#[tokio::test]
async fn test_list_watchlist_with_summary_and_alerts() {
    let app = build_test_app().await;

    let (status, json) = get_json(app, "/api/watchlist/demo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    // Oldest entries first
    let items = json["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["symbol"], "META");
    assert_eq!(items[1]["symbol"], "TSLA");
    assert_eq!(items[2]["symbol"], "JPM");

    // Quotes are joined in
    assert_eq!(items[1]["target_price"], "$230.00");
    assert_eq!(items[1]["current_price"], "$244.15");
    assert_eq!(items[1]["change_percent"], "-2.09%");
    assert!(items[2]["target_price"].is_null());

    let summary = &json["data"]["summary"];
    assert_eq!(summary["total_items"], 3);
    assert_eq!(summary["alerts_enabled"], 2);
    assert_eq!(summary["gaining"], 1);
    assert_eq!(summary["losing"], 2);
    assert_eq!(summary["top_performer"]["symbol"], "META");
    assert_eq!(summary["top_performer"]["change_percent"], "+0.82%");

    // TSLA trades more than 2% above its 230 target; META sits inside its band
    let alerts = json["data"]["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["symbol"], "TSLA");
    assert_eq!(alerts[0]["kind"], "above_target");
    assert_eq!(alerts[0]["target_price"], "$230.00");
    assert_eq!(alerts[0]["current_price"], "$244.15");
    assert_eq!(alerts[0]["deviation"], "+6.15%");
}

#[tokio::test]
async fn test_add_stock_to_watchlist() {
    let app = build_test_app().await;

    let body = json!({
        "symbol": "AAPL",
        "notes": "Core holding",
        "target_price": 170,
        "alert_enabled": true,
    });
    let (status, json) = send_json(app.clone(), "POST", "/api/watchlist/demo", &body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["symbol"], "AAPL");
    assert_eq!(json["data"]["notes"], "Core holding");
    assert_eq!(json["data"]["target_price"], "$170.00");
    assert_eq!(json["data"]["alert_enabled"], true);
    assert_eq!(json["data"]["current_price"], "$178.25");

    let (_, listed) = get_json(app, "/api/watchlist/demo").await;
    assert_eq!(listed["data"]["items"].as_array().unwrap().len(), 4);
    assert_eq!(listed["data"]["summary"]["total_items"], 4);
}

#[tokio::test]
async fn test_add_duplicate_symbol_is_rejected() {
    let app = build_test_app().await;

    let body = json!({ "symbol": "TSLA" });
    let (status, json) = send_json(app, "POST", "/api/watchlist/demo", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Stock already in watchlist");
}

#[tokio::test]
async fn test_add_unquoted_symbol_is_404() {
    let app = build_test_app().await;

    let body = json!({ "symbol": "ZZZZ" });
    let (status, json) = send_json(app, "POST", "/api/watchlist/demo", &body).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Stock not found");
}

#[tokio::test]
async fn test_add_invalid_symbol_is_400() {
    let app = build_test_app().await;

    let body = json!({ "symbol": "BRK.A" });
    let (status, json) = send_json(app, "POST", "/api/watchlist/demo", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid stock symbol: BRK.A");
}

#[tokio::test]
async fn test_retarget_flips_alert_direction() {
    let app = build_test_app().await;

    let (_, listed) = get_json(app.clone(), "/api/watchlist/demo").await;
    let items = listed["data"]["items"].as_array().unwrap();
    let tsla = items.iter().find(|item| item["symbol"] == "TSLA").unwrap();
    let uri = format!("/api/watchlist/demo/{}", tsla["id"].as_str().unwrap());

    // Raising the target above the current price flips the alert direction
    let patch = json!({ "target_price": 260 });
    let (status, json) = send_json(app.clone(), "PATCH", &uri, &patch).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["target_price"], "$260.00");

    let (_, refreshed) = get_json(app, "/api/watchlist/demo").await;
    let alerts = refreshed["data"]["alerts"].as_array().unwrap();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0]["kind"], "below_target");
    assert_eq!(alerts[0]["deviation"], "-6.10%");
}

#[tokio::test]
async fn test_patch_unknown_item_is_404() {
    let app = build_test_app().await;

    let uri = format!("/api/watchlist/demo/{}", uuid::Uuid::new_v4());
    let (status, json) = send_json(app, "PATCH", &uri, &json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Watchlist item not found");
}

#[tokio::test]
async fn test_remove_watchlist_item_twice() {
    let app = build_test_app().await;

    let (_, listed) = get_json(app.clone(), "/api/watchlist/demo").await;
    let id = listed["data"]["items"][0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/watchlist/demo/{id}");

    let (status, json) = delete_json(app.clone(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = delete_json(app, &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Watchlist item not found");
}
