use std::sync::Arc;

use metrics::counter;

use crate::domain::{Stock, Transaction};
use crate::errors::AppError;
use crate::store::{StockRepository, TransactionRepository};

use super::{
    validate_user_id, PortfolioOverview, PortfolioService, WatchlistOverview, WatchlistService,
};

/// How much history the dashboard shows.
const RECENT_TRANSACTIONS: usize = 5;

/// One-call payload backing the dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub portfolio: PortfolioOverview,
    pub stocks: Vec<Stock>,
    pub recent_transactions: Vec<Transaction>,
    pub watchlist: WatchlistOverview,
}

#[derive(Clone)]
pub struct DashboardService {
    portfolio: PortfolioService,
    watchlist: WatchlistService,
    stocks: Arc<dyn StockRepository>,
    transactions: Arc<dyn TransactionRepository>,
}

impl DashboardService {
    pub fn new(
        portfolio: PortfolioService,
        watchlist: WatchlistService,
        stocks: Arc<dyn StockRepository>,
        transactions: Arc<dyn TransactionRepository>,
    ) -> Self {
        Self {
            portfolio,
            watchlist,
            stocks,
            transactions,
        }
    }

    /// Aggregate the portfolio overview, all quotes, the latest
    /// transactions and the watchlist into one payload.
    pub async fn snapshot(&self, user_id: &str) -> Result<DashboardSnapshot, AppError> {
        let user_id = validate_user_id(user_id)?;

        let portfolio = self.portfolio.overview(user_id).await?;
        let watchlist = self.watchlist.list(user_id).await?;
        let stocks = self.stocks.list().await?;
        let mut recent_transactions = self.transactions.list_by_user(user_id).await?;
        recent_transactions.truncate(RECENT_TRANSACTIONS);

        counter!("dashboard_requests_total").increment(1);
        tracing::debug!(user_id = %user_id, "Built dashboard snapshot");

        Ok(DashboardSnapshot {
            portfolio,
            stocks,
            recent_transactions,
            watchlist,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
