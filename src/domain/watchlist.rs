use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Money, StockSymbol};

/// One tracked symbol on a user's watchlist.
///
/// Updates use the functional pattern: `with_*` consumes the item and
/// returns a modified copy, leaving every other field untouched.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistItem {
    id: Uuid,
    user_id: String,
    symbol: StockSymbol,
    added_at: DateTime<Utc>,
    notes: String,
    target_price: Option<Money>,
    alert_enabled: bool,
}

impl WatchlistItem {
    pub fn new(
        id: Uuid,
        user_id: &str,
        symbol: StockSymbol,
        added_at: DateTime<Utc>,
        notes: &str,
        target_price: Option<Money>,
        alert_enabled: bool,
    ) -> Self {
        Self {
            id,
            user_id: user_id.to_string(),
            symbol,
            added_at,
            notes: notes.to_string(),
            target_price,
            alert_enabled,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn symbol(&self) -> &StockSymbol {
        &self.symbol
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn target_price(&self) -> Option<&Money> {
        self.target_price.as_ref()
    }

    pub fn alert_enabled(&self) -> bool {
        self.alert_enabled
    }

    pub fn with_notes(self, notes: &str) -> Self {
        Self {
            notes: notes.to_string(),
            ..self
        }
    }

    pub fn with_target_price(self, target_price: Option<Money>) -> Self {
        Self {
            target_price,
            ..self
        }
    }

    pub fn with_alert_enabled(self, alert_enabled: bool) -> Self {
        Self {
            alert_enabled,
            ..self
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
