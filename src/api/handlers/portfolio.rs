use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::PortfolioDto;
use crate::api::handlers::ApiResponse;
use crate::errors::AppError;
use crate::AppState;

/// GET /api/portfolio/:user_id
pub async fn get_portfolio(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<PortfolioDto>>, AppError> {
    let overview = state.portfolio.overview(&user_id).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(PortfolioDto::from(&overview)),
        error: None,
    }))
}
