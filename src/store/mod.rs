pub mod portfolio_repo;
pub mod seed;
pub mod stock_repo;
pub mod transaction_repo;
pub mod watchlist_repo;

pub use portfolio_repo::{InMemoryPortfolioRepository, PortfolioRepository};
pub use seed::seed_demo_data;
pub use stock_repo::{InMemoryStockRepository, StockRepository};
pub use transaction_repo::{InMemoryTransactionRepository, TransactionRepository};
pub use watchlist_repo::{InMemoryWatchlistRepository, WatchlistRepository};

/// Errors surfaced by the store layer.
///
/// The in-memory backend can only miss; the variant carries the entity
/// name so callers render `"<entity> not found"` directly. The signatures
/// leave room for a persistent backend with richer failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(&'static str),
}
