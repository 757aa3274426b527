use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StoreError;
use crate::domain::{Stock, StockSymbol};

/// Access to the quote table.
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// All quotes, ordered by symbol.
    async fn list(&self) -> Result<Vec<Stock>, StoreError>;
    async fn find_by_symbol(&self, symbol: &StockSymbol) -> Result<Option<Stock>, StoreError>;
    async fn save(&self, stock: Stock) -> Result<(), StoreError>;
}

/// Quote table held in process memory, keyed by symbol.
#[derive(Debug, Default)]
pub struct InMemoryStockRepository {
    stocks: RwLock<HashMap<StockSymbol, Stock>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn list(&self) -> Result<Vec<Stock>, StoreError> {
        let stocks = self.stocks.read().await;
        let mut all: Vec<Stock> = stocks.values().cloned().collect();
        all.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        Ok(all)
    }

    async fn find_by_symbol(&self, symbol: &StockSymbol) -> Result<Option<Stock>, StoreError> {
        Ok(self.stocks.read().await.get(symbol).cloned())
    }

    async fn save(&self, stock: Stock) -> Result<(), StoreError> {
        self.stocks
            .write()
            .await
            .insert(stock.symbol().clone(), stock);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{Money, Percentage};

    fn make_stock(symbol: &str) -> Stock {
        Stock::new(
            Uuid::new_v4(),
            StockSymbol::new(symbol).unwrap(),
            symbol,
            Money::new(Decimal::from(100), "USD").unwrap(),
            Money::new(Decimal::ONE, "USD").unwrap(),
            Percentage::new(Decimal::ONE),
            1_000,
            "10B",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_is_sorted_by_symbol() {
        let repo = InMemoryStockRepository::new();
        repo.save(make_stock("MSFT")).await.unwrap();
        repo.save(make_stock("AAPL")).await.unwrap();
        repo.save(make_stock("GOOGL")).await.unwrap();

        let all = repo.list().await.unwrap();
        let symbols: Vec<&str> = all.iter().map(|s| s.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "MSFT"]);
    }

    #[tokio::test]
    async fn test_save_replaces_existing_symbol() {
        let repo = InMemoryStockRepository::new();
        repo.save(make_stock("AAPL")).await.unwrap();
        repo.save(make_stock("AAPL")).await.unwrap();
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_symbol_misses_cleanly() {
        let repo = InMemoryStockRepository::new();
        let missing = repo
            .find_by_symbol(&StockSymbol::new("ZZZZ").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }
}
