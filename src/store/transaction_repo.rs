use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StoreError;
use crate::domain::Transaction;

/// Access to per-user transaction history.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// A user's history, newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, StoreError>;
    async fn add(&self, transaction: Transaction) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryTransactionRepository {
    transactions: RwLock<HashMap<String, Vec<Transaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, StoreError> {
        let transactions = self.transactions.read().await;
        let mut history = transactions.get(user_id).cloned().unwrap_or_default();
        history.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        Ok(history)
    }

    async fn add(&self, transaction: Transaction) -> Result<(), StoreError> {
        self.transactions
            .write()
            .await
            .entry(transaction.user_id().to_string())
            .or_default()
            .push(transaction);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{Money, StockSymbol, TransactionType};

    fn make_buy(user_id: &str, symbol: &str, days_ago: i64) -> Transaction {
        Transaction::new(
            Uuid::new_v4(),
            user_id,
            TransactionType::Buy,
            StockSymbol::new(symbol).unwrap(),
            Money::new(Decimal::from(1_000), "USD").unwrap(),
            Some(Decimal::from(10)),
            Utc::now() - Duration::days(days_ago),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = InMemoryTransactionRepository::new();
        repo.add(make_buy("demo", "AAPL", 30)).await.unwrap();
        repo.add(make_buy("demo", "MSFT", 5)).await.unwrap();
        repo.add(make_buy("demo", "NVDA", 60)).await.unwrap();

        let history = repo.list_by_user("demo").await.unwrap();
        let symbols: Vec<&str> = history.iter().map(|tx| tx.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["MSFT", "AAPL", "NVDA"]);
    }

    #[tokio::test]
    async fn test_histories_are_per_user() {
        let repo = InMemoryTransactionRepository::new();
        repo.add(make_buy("alice", "AAPL", 1)).await.unwrap();

        assert_eq!(repo.list_by_user("alice").await.unwrap().len(), 1);
        assert!(repo.list_by_user("bob").await.unwrap().is_empty());
    }
}
