pub mod money;
pub mod percentage;
pub mod portfolio;
pub mod stock;
pub mod symbol;
pub mod transaction;
pub mod watchlist;

pub use money::Money;
pub use percentage::Percentage;
pub use portfolio::Portfolio;
pub use stock::Stock;
pub use symbol::StockSymbol;
pub use transaction::{Transaction, TransactionType};
pub use watchlist::WatchlistItem;

use rust_decimal::Decimal;

/// Validation failure raised when constructing a value object or entity.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(Decimal),

    #[error("Currency mismatch: {0} vs {1}")]
    CurrencyMismatch(String, String),

    #[error("Multiplier cannot be negative: {0}")]
    NegativeFactor(Decimal),

    #[error("Invalid stock symbol: {0}")]
    InvalidSymbol(String),

    #[error("Success rate must be between 0 and 100, got {0}")]
    SuccessRateOutOfRange(Decimal),

    #[error("{0} transactions require a share count")]
    SharesRequired(TransactionType),

    #[error("Share count must be positive: {0}")]
    InvalidShares(Decimal),
}
