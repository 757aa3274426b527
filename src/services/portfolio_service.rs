use std::sync::Arc;

use crate::analytics::{self, Allocation, PerformanceStatus, RiskMetrics};
use crate::domain::{Percentage, Portfolio};
use crate::errors::AppError;
use crate::store::{PortfolioRepository, StockRepository, TransactionRepository};

use super::validate_user_id;

/// Stored portfolio row together with everything derived from it.
#[derive(Debug, Clone)]
pub struct PortfolioOverview {
    pub portfolio: Portfolio,
    pub daily_return: Percentage,
    pub status: PerformanceStatus,
    pub is_diversified: bool,
    pub risk: RiskMetrics,
    pub allocation: Vec<Allocation>,
}

#[derive(Clone)]
pub struct PortfolioService {
    portfolios: Arc<dyn PortfolioRepository>,
    transactions: Arc<dyn TransactionRepository>,
    stocks: Arc<dyn StockRepository>,
}

impl PortfolioService {
    pub fn new(
        portfolios: Arc<dyn PortfolioRepository>,
        transactions: Arc<dyn TransactionRepository>,
        stocks: Arc<dyn StockRepository>,
    ) -> Self {
        Self {
            portfolios,
            transactions,
            stocks,
        }
    }

    /// The stored portfolio plus derived performance, risk and allocation.
    pub async fn overview(&self, user_id: &str) -> Result<PortfolioOverview, AppError> {
        let user_id = validate_user_id(user_id)?;

        let portfolio = self
            .portfolios
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Portfolio not found".into()))?;

        let history = self.transactions.list_by_user(user_id).await?;
        let quotes = self.stocks.list().await?;
        let positions = analytics::net_positions(&history);

        let daily_return = portfolio.daily_return();
        let status = analytics::classify_performance(daily_return, portfolio.success_rate());
        let is_diversified = portfolio.is_diversified();
        let risk = analytics::risk_metrics(&portfolio);
        // A currency clash here means the stored data is inconsistent, not
        // that the caller did anything wrong.
        let allocation = analytics::allocation(&positions, &quotes)
            .map_err(|e| AppError::Internal(e.into()))?;

        Ok(PortfolioOverview {
            portfolio,
            daily_return,
            status,
            is_diversified,
            risk,
            allocation,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::{
        seed_demo_data, InMemoryPortfolioRepository, InMemoryStockRepository,
        InMemoryTransactionRepository, InMemoryWatchlistRepository,
    };

    async fn seeded_service() -> PortfolioService {
        let stocks = Arc::new(InMemoryStockRepository::new());
        let portfolios = Arc::new(InMemoryPortfolioRepository::new());
        let transactions = Arc::new(InMemoryTransactionRepository::new());
        let watchlist = InMemoryWatchlistRepository::new();
        let config = AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            base_currency: "USD".into(),
            demo_user_id: "demo".into(),
            seed_demo_data: true,
        };
        seed_demo_data(
            stocks.as_ref(),
            portfolios.as_ref(),
            transactions.as_ref(),
            &watchlist,
            &config,
        )
        .await
        .unwrap();

        PortfolioService::new(portfolios, transactions, stocks)
    }

    #[tokio::test]
    async fn test_overview_derives_status_and_allocation() {
        let service = seeded_service().await;
        let overview = service.overview("demo").await.unwrap();

        assert_eq!(overview.status, PerformanceStatus::Good);
        assert!(overview.is_diversified);
        assert_eq!(overview.daily_return.format_signed(), "+1.09%");
        assert_eq!(overview.allocation.len(), 5);
        // Heaviest slice first
        assert_eq!(overview.allocation[0].symbol.as_str(), "AAPL");
    }

    #[tokio::test]
    async fn test_overview_unknown_user_is_not_found() {
        let service = seeded_service().await;
        let err = service.overview("nobody").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Portfolio not found"));
    }

    #[tokio::test]
    async fn test_overview_blank_user_is_bad_request() {
        let service = seeded_service().await;
        let err = service.overview("  ").await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(msg) if msg == "Invalid user ID"));
    }
}
