use serde::Serialize;

pub mod dashboard;
pub mod health;
pub mod metrics;
pub mod portfolio;
pub mod stocks;
pub mod transactions;
pub mod watchlist;

/// Standard envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
