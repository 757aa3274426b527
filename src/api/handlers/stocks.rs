use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::StockDto;
use crate::api::handlers::ApiResponse;
use crate::domain::StockSymbol;
use crate::errors::AppError;
use crate::AppState;

/// GET /api/stocks
pub async fn list_stocks(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<StockDto>>>, AppError> {
    let quotes = state.stocks.list().await?;
    let stocks = quotes.iter().map(StockDto::from).collect();
    Ok(Json(ApiResponse {
        success: true,
        data: Some(stocks),
        error: None,
    }))
}

/// GET /api/stocks/:symbol
pub async fn get_stock(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<StockDto>>, AppError> {
    let symbol = StockSymbol::new(&symbol)?;
    let quote = state
        .stocks
        .find_by_symbol(&symbol)
        .await?
        .ok_or_else(|| AppError::NotFound("Stock not found".to_string()))?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(StockDto::from(&quote)),
        error: None,
    }))
}
