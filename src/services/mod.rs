pub mod dashboard_service;
pub mod portfolio_service;
pub mod watchlist_service;

pub use dashboard_service::{DashboardService, DashboardSnapshot};
pub use portfolio_service::{PortfolioOverview, PortfolioService};
pub use watchlist_service::{
    NewWatchlistItem, WatchedStock, WatchlistOverview, WatchlistService, WatchlistUpdate,
};

use crate::errors::AppError;

/// User ids arrive as path segments; blank ones are a client error.
pub(crate) fn validate_user_id(user_id: &str) -> Result<&str, AppError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Invalid user ID".into()));
    }
    Ok(trimmed)
}
