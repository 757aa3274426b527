use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::dto::{WatchlistDto, WatchlistItemDto};
use crate::api::handlers::ApiResponse;
use crate::errors::AppError;
use crate::services::{NewWatchlistItem, WatchlistUpdate};
use crate::AppState;

/// GET /api/watchlist/:user_id
pub async fn list_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<WatchlistDto>>, AppError> {
    let overview = state.watchlist.list(&user_id).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(WatchlistDto::from(&overview)),
        error: None,
    }))
}

/// POST /api/watchlist/:user_id
pub async fn add_to_watchlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<NewWatchlistItem>,
) -> Result<Json<ApiResponse<WatchlistItemDto>>, AppError> {
    let watched = state.watchlist.add(&user_id, request).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(WatchlistItemDto::from(&watched)),
        error: None,
    }))
}

/// PATCH /api/watchlist/:user_id/:item_id
pub async fn update_watchlist_item(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(String, Uuid)>,
    Json(patch): Json<WatchlistUpdate>,
) -> Result<Json<ApiResponse<WatchlistItemDto>>, AppError> {
    let watched = state.watchlist.update(&user_id, item_id, patch).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(WatchlistItemDto::from(&watched)),
        error: None,
    }))
}

/// DELETE /api/watchlist/:user_id/:item_id
pub async fn remove_from_watchlist(
    State(state): State<AppState>,
    Path((user_id, item_id)): Path<(String, Uuid)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    state.watchlist.remove(&user_id, item_id).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(()),
        error: None,
    }))
}
