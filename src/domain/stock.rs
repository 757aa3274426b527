use serde::Serialize;
use uuid::Uuid;

use super::{DomainError, Money, Percentage, StockSymbol};

/// A quoted stock.
///
/// `change` is the magnitude of the day's move; its direction lives in the
/// signed `change_percent`.
#[derive(Debug, Clone, Serialize)]
pub struct Stock {
    id: Uuid,
    symbol: StockSymbol,
    name: String,
    price: Money,
    change: Money,
    change_percent: Percentage,
    volume: u64,
    market_cap: String,
}

impl Stock {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        symbol: StockSymbol,
        name: &str,
        price: Money,
        change: Money,
        change_percent: Percentage,
        volume: u64,
        market_cap: &str,
    ) -> Result<Self, DomainError> {
        if price.currency() != change.currency() {
            return Err(DomainError::CurrencyMismatch(
                price.currency().to_string(),
                change.currency().to_string(),
            ));
        }
        Ok(Self {
            id,
            symbol,
            name: name.to_string(),
            price,
            change,
            change_percent,
            volume,
            market_cap: market_cap.to_string(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn symbol(&self) -> &StockSymbol {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn change(&self) -> &Money {
        &self.change
    }

    pub fn change_percent(&self) -> Percentage {
        self.change_percent
    }

    pub fn volume(&self) -> u64 {
        self.volume
    }

    pub fn market_cap(&self) -> &str {
        &self.market_cap
    }

    pub fn is_gaining(&self) -> bool {
        self.change_percent.is_positive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
