use std::sync::Arc;

use chrono::Utc;
use metrics::counter;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::analytics::{self, TriggeredAlert, WatchlistSummary};
use crate::domain::{Money, Stock, StockSymbol, WatchlistItem};
use crate::errors::AppError;
use crate::store::{StockRepository, WatchlistRepository};

use super::validate_user_id;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// POST body for adding a watchlist entry.
#[derive(Debug, Deserialize)]
pub struct NewWatchlistItem {
    pub symbol: String,
    #[serde(default)]
    pub notes: String,
    pub target_price: Option<Decimal>,
    #[serde(default)]
    pub alert_enabled: bool,
}

/// PATCH body; absent fields stay unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct WatchlistUpdate {
    pub notes: Option<String>,
    pub target_price: Option<Decimal>,
    pub alert_enabled: Option<bool>,
}

// ---------------------------------------------------------------------------
// View structs
// ---------------------------------------------------------------------------

/// Watch item enriched with its current quote, when one exists.
#[derive(Debug, Clone)]
pub struct WatchedStock {
    pub item: WatchlistItem,
    pub quote: Option<Stock>,
}

/// Everything the watchlist view needs in one pass.
#[derive(Debug, Clone)]
pub struct WatchlistOverview {
    pub items: Vec<WatchedStock>,
    pub summary: WatchlistSummary,
    pub alerts: Vec<TriggeredAlert>,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct WatchlistService {
    watchlist: Arc<dyn WatchlistRepository>,
    stocks: Arc<dyn StockRepository>,
    base_currency: String,
}

impl WatchlistService {
    pub fn new(
        watchlist: Arc<dyn WatchlistRepository>,
        stocks: Arc<dyn StockRepository>,
        base_currency: &str,
    ) -> Self {
        Self {
            watchlist,
            stocks,
            base_currency: base_currency.to_string(),
        }
    }

    /// Items with their quotes, the aggregate summary, and triggered alerts.
    pub async fn list(&self, user_id: &str) -> Result<WatchlistOverview, AppError> {
        let user_id = validate_user_id(user_id)?;
        let items = self.watchlist.list_by_user(user_id).await?;
        let quotes = self.stocks.list().await?;
        Ok(build_overview(items, &quotes))
    }

    /// Add a symbol to the user's watchlist. The symbol must be valid and
    /// quoted, and must not already be on the list.
    pub async fn add(
        &self,
        user_id: &str,
        request: NewWatchlistItem,
    ) -> Result<WatchedStock, AppError> {
        let user_id = validate_user_id(user_id)?;
        let symbol = StockSymbol::new(&request.symbol)?;

        let stock = self
            .stocks
            .find_by_symbol(&symbol)
            .await?
            .ok_or_else(|| AppError::NotFound("Stock not found".into()))?;

        if self
            .watchlist
            .find_by_symbol(user_id, &symbol)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("Stock already in watchlist".into()));
        }

        let target_price = match request.target_price {
            Some(amount) => Some(Money::new(amount, stock.price().currency())?),
            None => None,
        };

        let item = WatchlistItem::new(
            Uuid::new_v4(),
            user_id,
            symbol,
            Utc::now(),
            &request.notes,
            target_price,
            request.alert_enabled,
        );
        self.watchlist.insert(item.clone()).await?;

        counter!("watchlist_items_added").increment(1);
        tracing::info!(user_id = %user_id, symbol = %item.symbol(), "Added watchlist item");

        Ok(WatchedStock {
            item,
            quote: Some(stock),
        })
    }

    /// Apply a partial update to one item.
    pub async fn update(
        &self,
        user_id: &str,
        item_id: Uuid,
        patch: WatchlistUpdate,
    ) -> Result<WatchedStock, AppError> {
        let user_id = validate_user_id(user_id)?;

        let existing = self
            .watchlist
            .find(user_id, item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Watchlist item not found".into()))?;
        let quote = self.stocks.find_by_symbol(existing.symbol()).await?;

        let mut updated = existing;
        if let Some(notes) = &patch.notes {
            updated = updated.with_notes(notes);
        }
        if let Some(amount) = patch.target_price {
            // Targets are priced in the quote's currency; items can only be
            // added for quoted stocks, so the fallback is cosmetic.
            let currency = quote
                .as_ref()
                .map(|stock| stock.price().currency().to_string())
                .unwrap_or_else(|| self.base_currency.clone());
            updated = updated.with_target_price(Some(Money::new(amount, &currency)?));
        }
        if let Some(alert_enabled) = patch.alert_enabled {
            updated = updated.with_alert_enabled(alert_enabled);
        }

        let stored = self.watchlist.update(updated).await?;
        Ok(WatchedStock {
            item: stored,
            quote,
        })
    }

    /// Drop one item from the user's list.
    pub async fn remove(&self, user_id: &str, item_id: Uuid) -> Result<(), AppError> {
        let user_id = validate_user_id(user_id)?;
        self.watchlist.delete(user_id, item_id).await?;

        counter!("watchlist_items_removed").increment(1);
        tracing::info!(user_id = %user_id, item_id = %item_id, "Removed watchlist item");
        Ok(())
    }
}

fn build_overview(items: Vec<WatchlistItem>, quotes: &[Stock]) -> WatchlistOverview {
    let summary = analytics::summarize(&items, quotes);

    let mut alerts = Vec::new();
    let mut watched = Vec::with_capacity(items.len());
    for item in items {
        let quote = quotes
            .iter()
            .find(|stock| stock.symbol() == item.symbol())
            .cloned();
        if let Some(stock) = &quote {
            if let Some(alert) = analytics::evaluate_alert(&item, stock.price()) {
                alerts.push(alert);
            }
        }
        watched.push(WatchedStock { item, quote });
    }
    if !alerts.is_empty() {
        counter!("alerts_triggered_total").increment(alerts.len() as u64);
    }

    WatchlistOverview {
        items: watched,
        summary,
        alerts,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
