use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.stocks.list().await {
        Ok(quotes) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "quotes": quotes.len() })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unhealthy", "store": "unreachable" })),
        ),
    }
}
