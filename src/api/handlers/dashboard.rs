use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::DashboardDto;
use crate::api::handlers::ApiResponse;
use crate::errors::AppError;
use crate::AppState;

/// GET /api/dashboard/:user_id
pub async fn get_dashboard(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<DashboardDto>>, AppError> {
    let snapshot = state.dashboard.snapshot(&user_id).await?;
    Ok(Json(ApiResponse {
        success: true,
        data: Some(DashboardDto::from(&snapshot)),
        error: None,
    }))
}
