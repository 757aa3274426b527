use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::TransactionDto;
use crate::api::handlers::ApiResponse;
use crate::errors::AppError;
use crate::services::validate_user_id;
use crate::AppState;

/// GET /api/transactions/:user_id
pub async fn list_transactions(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<TransactionDto>>>, AppError> {
    let user_id = validate_user_id(&user_id)?;
    let history = state.transactions.list_by_user(user_id).await?;
    let transactions = history.iter().map(TransactionDto::from).collect();
    Ok(Json(ApiResponse {
        success: true,
        data: Some(transactions),
        error: None,
    }))
}
