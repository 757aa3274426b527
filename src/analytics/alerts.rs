use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Money, Percentage, Stock, StockSymbol, WatchlistItem};

/// Direction in which a quote has left its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    AboveTarget,
    BelowTarget,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::AboveTarget => "above_target",
            AlertKind::BelowTarget => "below_target",
        }
    }
}

/// A watch item whose quote sits outside the target tolerance band.
#[derive(Debug, Clone, Serialize)]
pub struct TriggeredAlert {
    pub item_id: Uuid,
    pub symbol: StockSymbol,
    pub kind: AlertKind,
    pub target_price: Money,
    pub current_price: Money,
    pub deviation: Percentage,
}

/// Highest-percentage-change quoted symbol on the list.
#[derive(Debug, Clone, Serialize)]
pub struct TopPerformer {
    pub symbol: StockSymbol,
    pub change_percent: Percentage,
}

/// Aggregate counts over a user's watchlist.
#[derive(Debug, Clone, Serialize)]
pub struct WatchlistSummary {
    pub total_items: usize,
    pub alerts_enabled: usize,
    pub gaining: usize,
    pub losing: usize,
    pub top_performer: Option<TopPerformer>,
}

// ---------------------------------------------------------------------------
// Alert evaluation
// ---------------------------------------------------------------------------

/// Check one watch item against its current quote.
///
/// Fires only when alerting is enabled, a target is set, and the price sits
/// strictly outside target ± 2%. A target in a different currency than the
/// quote cannot be compared and never fires; neither does a zero target.
pub fn evaluate_alert(item: &WatchlistItem, current_price: &Money) -> Option<TriggeredAlert> {
    if !item.alert_enabled() {
        return None;
    }
    let target = item.target_price()?;
    if target.currency() != current_price.currency() || target.is_zero() {
        return None;
    }

    let tolerance = Decimal::new(2, 2); // 0.02
    let upper = target.amount() * (Decimal::ONE + tolerance);
    let lower = target.amount() * (Decimal::ONE - tolerance);

    let price = current_price.amount();
    let kind = if price > upper {
        AlertKind::AboveTarget
    } else if price < lower {
        AlertKind::BelowTarget
    } else {
        return None;
    };

    let deviation =
        Percentage::new((price - target.amount()) / target.amount() * Decimal::ONE_HUNDRED);

    Some(TriggeredAlert {
        item_id: item.id(),
        symbol: item.symbol().clone(),
        kind,
        target_price: target.clone(),
        current_price: current_price.clone(),
        deviation,
    })
}

// ---------------------------------------------------------------------------
// Watchlist summary
// ---------------------------------------------------------------------------

/// Aggregate a watchlist against the current quotes.
///
/// Gaining/losing counts and the top performer only consider items with a
/// quote; the totals count every item.
pub fn summarize(items: &[WatchlistItem], quotes: &[Stock]) -> WatchlistSummary {
    let by_symbol: HashMap<&StockSymbol, &Stock> =
        quotes.iter().map(|stock| (stock.symbol(), stock)).collect();

    let mut gaining = 0;
    let mut losing = 0;
    let mut top: Option<&Stock> = None;

    for item in items {
        let Some(stock) = by_symbol.get(item.symbol()) else {
            continue;
        };
        if stock.change_percent().is_positive() {
            gaining += 1;
        } else if stock.change_percent().is_negative() {
            losing += 1;
        }
        if top.map_or(true, |best| stock.change_percent() > best.change_percent()) {
            top = Some(stock);
        }
    }

    WatchlistSummary {
        total_items: items.len(),
        alerts_enabled: items.iter().filter(|item| item.alert_enabled()).count(),
        gaining,
        losing,
        top_performer: top.map(|stock| TopPerformer {
            symbol: stock.symbol().clone(),
            change_percent: stock.change_percent(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
