use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StoreError;
use crate::domain::Portfolio;

/// Access to stored portfolio rows, one per user.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Portfolio>, StoreError>;
    async fn save(&self, portfolio: Portfolio) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPortfolioRepository {
    portfolios: RwLock<HashMap<String, Portfolio>>,
}

impl InMemoryPortfolioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioRepository for InMemoryPortfolioRepository {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Portfolio>, StoreError> {
        Ok(self.portfolios.read().await.get(user_id).cloned())
    }

    async fn save(&self, portfolio: Portfolio) -> Result<(), StoreError> {
        self.portfolios
            .write()
            .await
            .insert(portfolio.user_id().to_string(), portfolio);
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

    fn make_portfolio(user_id: &str) -> Portfolio {
        Portfolio::new(
            Uuid::new_v4(),
            user_id,
            Money::new(Decimal::from(10_000), "USD").unwrap(),
            Money::new(Decimal::from(100), "USD").unwrap(),
            Percentage::new(Decimal::from(75)),
            5,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_then_find_round_trips() {
        let repo = InMemoryPortfolioRepository::new();
        repo.save(make_portfolio("demo")).await.unwrap();

        let found = repo.find_by_user("demo").await.unwrap().unwrap();
        assert_eq!(found.user_id(), "demo");
        assert!(repo.find_by_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_per_user() {
        let repo = InMemoryPortfolioRepository::new();
        let first = make_portfolio("demo");
        let first_id = first.id();
        repo.save(first).await.unwrap();
        repo.save(make_portfolio("demo")).await.unwrap();

        let found = repo.find_by_user("demo").await.unwrap().unwrap();
        assert_ne!(found.id(), first_id);
    }
}
