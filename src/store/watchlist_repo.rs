use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StoreError;
use crate::domain::{StockSymbol, WatchlistItem};

/// Access to per-user watchlists.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// A user's items, oldest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>, StoreError>;
    async fn find(&self, user_id: &str, item_id: Uuid)
        -> Result<Option<WatchlistItem>, StoreError>;
    async fn find_by_symbol(
        &self,
        user_id: &str,
        symbol: &StockSymbol,
    ) -> Result<Option<WatchlistItem>, StoreError>;
    async fn insert(&self, item: WatchlistItem) -> Result<(), StoreError>;
    /// Replace the stored item with the same id; misses are an error.
    async fn update(&self, item: WatchlistItem) -> Result<WatchlistItem, StoreError>;
    async fn delete(&self, user_id: &str, item_id: Uuid) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct InMemoryWatchlistRepository {
    items: RwLock<HashMap<String, Vec<WatchlistItem>>>,
}

impl InMemoryWatchlistRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WatchlistRepository for InMemoryWatchlistRepository {
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<WatchlistItem>, StoreError> {
        let items = self.items.read().await;
        let mut list = items.get(user_id).cloned().unwrap_or_default();
        list.sort_by_key(|item| item.added_at());
        Ok(list)
    }

    async fn find(
        &self,
        user_id: &str,
        item_id: Uuid,
    ) -> Result<Option<WatchlistItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .get(user_id)
            .and_then(|list| list.iter().find(|item| item.id() == item_id))
            .cloned())
    }

    async fn find_by_symbol(
        &self,
        user_id: &str,
        symbol: &StockSymbol,
    ) -> Result<Option<WatchlistItem>, StoreError> {
        let items = self.items.read().await;
        Ok(items
            .get(user_id)
            .and_then(|list| list.iter().find(|item| item.symbol() == symbol))
            .cloned())
    }

    async fn insert(&self, item: WatchlistItem) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .entry(item.user_id().to_string())
            .or_default()
            .push(item);
        Ok(())
    }

    async fn update(&self, item: WatchlistItem) -> Result<WatchlistItem, StoreError> {
        let mut items = self.items.write().await;
        let list = items
            .get_mut(item.user_id())
            .ok_or(StoreError::NotFound("Watchlist item"))?;
        let slot = list
            .iter_mut()
            .find(|existing| existing.id() == item.id())
            .ok_or(StoreError::NotFound("Watchlist item"))?;
        *slot = item.clone();
        Ok(item)
    }

    async fn delete(&self, user_id: &str, item_id: Uuid) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        let list = items
            .get_mut(user_id)
            .ok_or(StoreError::NotFound("Watchlist item"))?;
        let index = list
            .iter()
            .position(|item| item.id() == item_id)
            .ok_or(StoreError::NotFound("Watchlist item"))?;
        list.remove(index);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
