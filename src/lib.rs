pub mod analytics;
pub mod api;
pub mod config;
pub mod domain;
pub mod errors;
pub mod metrics;
pub mod services;
pub mod store;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::services::{DashboardService, PortfolioService, WatchlistService};
use crate::store::{
    seed_demo_data, InMemoryPortfolioRepository, InMemoryStockRepository,
    InMemoryTransactionRepository, InMemoryWatchlistRepository, PortfolioRepository,
    StockRepository, TransactionRepository, WatchlistRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub stocks: Arc<dyn StockRepository>,
    pub transactions: Arc<dyn TransactionRepository>,
    pub portfolio: PortfolioService,
    pub watchlist: WatchlistService,
    pub dashboard: DashboardService,
    pub metrics_handle: PrometheusHandle,
}

/// Wire the repositories and services into one shared state value,
/// seeding demo data first when the config asks for it.
pub async fn build_state(
    config: AppConfig,
    metrics_handle: PrometheusHandle,
) -> anyhow::Result<AppState> {
    let stocks: Arc<dyn StockRepository> = Arc::new(InMemoryStockRepository::new());
    let portfolios: Arc<dyn PortfolioRepository> = Arc::new(InMemoryPortfolioRepository::new());
    let transactions: Arc<dyn TransactionRepository> =
        Arc::new(InMemoryTransactionRepository::new());
    let watchlist: Arc<dyn WatchlistRepository> = Arc::new(InMemoryWatchlistRepository::new());

    if config.seed_demo_data {
        seed_demo_data(
            stocks.as_ref(),
            portfolios.as_ref(),
            transactions.as_ref(),
            watchlist.as_ref(),
            &config,
        )
        .await?;
    }

    let portfolio = PortfolioService::new(
        portfolios,
        Arc::clone(&transactions),
        Arc::clone(&stocks),
    );
    let watchlist = WatchlistService::new(watchlist, Arc::clone(&stocks), &config.base_currency);
    let dashboard = DashboardService::new(
        portfolio.clone(),
        watchlist.clone(),
        Arc::clone(&stocks),
        Arc::clone(&transactions),
    );

    Ok(AppState {
        config,
        stocks,
        transactions,
        portfolio,
        watchlist,
        dashboard,
        metrics_handle,
    })
}
