//! Response shapes for the JSON API.
//!
//! Monetary amounts and percentages leave the service as display strings
//! (`"$1,234.56"`, `"+1.22%"`); the domain types stay internal.

use serde::Serialize;
use uuid::Uuid;

use crate::analytics::{Allocation, RiskMetrics, TriggeredAlert, WatchlistSummary};
use crate::domain::{Stock, Transaction};
use crate::services::{DashboardSnapshot, PortfolioOverview, WatchedStock, WatchlistOverview};

// ---------------------------------------------------------------------------
// Stocks
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct StockDto {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub change: String,
    pub change_percent: String,
    pub volume: u64,
    pub market_cap: String,
}

impl From<&Stock> for StockDto {
    fn from(stock: &Stock) -> Self {
        let sign = if stock.change_percent().is_negative() { "-" } else { "+" };
        Self {
            id: stock.id(),
            symbol: stock.symbol().to_string(),
            name: stock.name().to_string(),
            price: stock.price().format(),
            change: format!("{sign}{}", stock.change().format()),
            change_percent: stock.change_percent().format_signed(),
            volume: stock.volume(),
            market_cap: stock.market_cap().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Portfolio
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RiskDto {
    pub volatility: String,
    pub sharpe_ratio: String,
    pub max_drawdown: String,
    pub beta: String,
}

impl From<&RiskMetrics> for RiskDto {
    fn from(risk: &RiskMetrics) -> Self {
        Self {
            volatility: risk.volatility.format(),
            sharpe_ratio: format!("{:.2}", risk.sharpe_ratio),
            max_drawdown: risk.max_drawdown.format(),
            beta: format!("{:.2}", risk.beta),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AllocationDto {
    pub symbol: String,
    pub value: String,
    pub weight: String,
}

impl From<&Allocation> for AllocationDto {
    fn from(slice: &Allocation) -> Self {
        Self {
            symbol: slice.symbol.to_string(),
            value: slice.value.format(),
            weight: slice.weight.format(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PortfolioDto {
    pub id: Uuid,
    pub user_id: String,
    pub total_value: String,
    pub daily_pnl: String,
    pub daily_return: String,
    pub success_rate: String,
    pub active_positions: u32,
    pub is_diversified: bool,
    pub status: String,
    pub risk: RiskDto,
    pub allocation: Vec<AllocationDto>,
}

impl From<&PortfolioOverview> for PortfolioDto {
    fn from(overview: &PortfolioOverview) -> Self {
        let portfolio = &overview.portfolio;
        let pnl_sign = if overview.daily_return.is_negative() { "-" } else { "+" };
        Self {
            id: portfolio.id(),
            user_id: portfolio.user_id().to_string(),
            total_value: portfolio.total_value().format(),
            daily_pnl: format!("{pnl_sign}{}", portfolio.daily_pnl().format()),
            daily_return: overview.daily_return.format_signed(),
            success_rate: portfolio.success_rate().format(),
            active_positions: portfolio.active_positions(),
            is_diversified: overview.is_diversified,
            status: overview.status.as_str().to_string(),
            risk: RiskDto::from(&overview.risk),
            allocation: overview.allocation.iter().map(AllocationDto::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct TransactionDto {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub symbol: String,
    pub amount: String,
    pub shares: Option<String>,
    pub price_per_share: Option<String>,
    pub timestamp: String,
}

impl From<&Transaction> for TransactionDto {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id(),
            kind: tx.kind().to_string(),
            symbol: tx.symbol().to_string(),
            amount: tx.amount().format(),
            shares: tx.shares().map(|count| count.to_string()),
            price_per_share: tx.price_per_share().map(|price| format!("{price:.2}")),
            timestamp: tx.timestamp().to_rfc3339(),
        }
    }
}

// ---------------------------------------------------------------------------
// Watchlist
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct WatchlistItemDto {
    pub id: Uuid,
    pub symbol: String,
    pub added_at: String,
    pub notes: String,
    pub target_price: Option<String>,
    pub alert_enabled: bool,
    pub current_price: Option<String>,
    pub change_percent: Option<String>,
}

impl From<&WatchedStock> for WatchlistItemDto {
    fn from(watched: &WatchedStock) -> Self {
        let item = &watched.item;
        Self {
            id: item.id(),
            symbol: item.symbol().to_string(),
            added_at: item.added_at().to_rfc3339(),
            notes: item.notes().to_string(),
            target_price: item.target_price().map(|target| target.format()),
            alert_enabled: item.alert_enabled(),
            current_price: watched.quote.as_ref().map(|stock| stock.price().format()),
            change_percent: watched
                .quote
                .as_ref()
                .map(|stock| stock.change_percent().format_signed()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AlertDto {
    pub item_id: Uuid,
    pub symbol: String,
    pub kind: String,
    pub target_price: String,
    pub current_price: String,
    pub deviation: String,
}

impl From<&TriggeredAlert> for AlertDto {
    fn from(alert: &TriggeredAlert) -> Self {
        Self {
            item_id: alert.item_id,
            symbol: alert.symbol.to_string(),
            kind: alert.kind.as_str().to_string(),
            target_price: alert.target_price.format(),
            current_price: alert.current_price.format(),
            deviation: alert.deviation.format_signed(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopPerformerDto {
    pub symbol: String,
    pub change_percent: String,
}

#[derive(Debug, Serialize)]
pub struct WatchlistSummaryDto {
    pub total_items: usize,
    pub alerts_enabled: usize,
    pub gaining: usize,
    pub losing: usize,
    pub top_performer: Option<TopPerformerDto>,
}

impl From<&WatchlistSummary> for WatchlistSummaryDto {
    fn from(summary: &WatchlistSummary) -> Self {
        Self {
            total_items: summary.total_items,
            alerts_enabled: summary.alerts_enabled,
            gaining: summary.gaining,
            losing: summary.losing,
            top_performer: summary.top_performer.as_ref().map(|top| TopPerformerDto {
                symbol: top.symbol.to_string(),
                change_percent: top.change_percent.format_signed(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WatchlistDto {
    pub items: Vec<WatchlistItemDto>,
    pub summary: WatchlistSummaryDto,
    pub alerts: Vec<AlertDto>,
}

impl From<&WatchlistOverview> for WatchlistDto {
    fn from(overview: &WatchlistOverview) -> Self {
        Self {
            items: overview.items.iter().map(WatchlistItemDto::from).collect(),
            summary: WatchlistSummaryDto::from(&overview.summary),
            alerts: overview.alerts.iter().map(AlertDto::from).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct DashboardDto {
    pub portfolio: PortfolioDto,
    pub stocks: Vec<StockDto>,
    pub recent_transactions: Vec<TransactionDto>,
    pub watchlist: WatchlistDto,
}

impl From<&DashboardSnapshot> for DashboardDto {
    fn from(snapshot: &DashboardSnapshot) -> Self {
        Self {
            portfolio: PortfolioDto::from(&snapshot.portfolio),
            stocks: snapshot.stocks.iter().map(StockDto::from).collect(),
            recent_transactions: snapshot
                .recent_transactions
                .iter()
                .map(TransactionDto::from)
                .collect(),
            watchlist: WatchlistDto::from(&snapshot.watchlist),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{Money, Percentage, StockSymbol, TransactionType};

    fn usd(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), "USD").unwrap()
    }

    #[test]
    fn test_stock_dto_signs_the_change() {
        let falling = Stock::new(
            Uuid::new_v4(),
            StockSymbol::new("TSLA").unwrap(),
            "Tesla Inc.",
            usd(24415),
            usd(520),
            Percentage::new(Decimal::new(-209, 2)),
            96_224_700,
            "777.8B",
        )
        .unwrap();
        let dto = StockDto::from(&falling);
        assert_eq!(dto.price, "$244.15");
        assert_eq!(dto.change, "-$5.20");
        assert_eq!(dto.change_percent, "-2.09%");
    }

    #[test]
    fn test_transaction_dto_renames_kind_and_formats_amount() {
        let tx = Transaction::new(
            Uuid::new_v4(),
            "demo",
            TransactionType::Buy,
            StockSymbol::new("AAPL").unwrap(),
            usd(676000),
            Some(Decimal::from(40)),
            Utc::now(),
        )
        .unwrap();
        let dto = TransactionDto::from(&tx);
        assert_eq!(dto.kind, "buy");
        assert_eq!(dto.amount, "$6,760.00");
        assert_eq!(dto.shares.as_deref(), Some("40"));
        assert_eq!(dto.price_per_share.as_deref(), Some("169.00"));

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("kind").is_none());
    }
}
