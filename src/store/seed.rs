use chrono::{Duration, Utc};
use metrics::gauge;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{PortfolioRepository, StockRepository, TransactionRepository, WatchlistRepository};
use crate::analytics;
use crate::config::AppConfig;
use crate::domain::{
    Money, Percentage, Portfolio, Stock, StockSymbol, Transaction, TransactionType, WatchlistItem,
};

/// Seed the in-memory store with the demo data set: eight quoted stocks,
/// the demo user's trade history and watchlist, and a portfolio row derived
/// from that history through the analytics functions so the stored and the
/// computed views agree.
pub async fn seed_demo_data(
    stocks: &dyn StockRepository,
    portfolios: &dyn PortfolioRepository,
    transactions: &dyn TransactionRepository,
    watchlist: &dyn WatchlistRepository,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let currency = config.base_currency.as_str();
    let user = config.demo_user_id.as_str();

    // Prices and changes in cents; the falling flag gives the change its sign.
    let quotes = vec![
        quote("AAPL", "Apple Inc.", 17825, 215, true, 58_432_100, "2.78T", currency)?,
        quote("GOOGL", "Alphabet Inc.", 14180, 105, true, 24_118_000, "1.78T", currency)?,
        quote("MSFT", "Microsoft Corporation", 41530, 385, true, 19_207_400, "3.09T", currency)?,
        quote("AMZN", "Amazon.com Inc.", 18240, 165, true, 41_376_900, "1.90T", currency)?,
        quote("NVDA", "NVIDIA Corporation", 87560, 1240, true, 47_851_200, "2.19T", currency)?,
        quote("TSLA", "Tesla Inc.", 24415, 520, false, 96_224_700, "777.8B", currency)?,
        quote("META", "Meta Platforms Inc.", 50595, 410, true, 15_982_300, "1.28T", currency)?,
        quote("JPM", "JPMorgan Chase & Co.", 19870, 55, false, 8_614_500, "571.4B", currency)?,
    ];
    for stock in &quotes {
        stocks.save(stock.clone()).await?;
    }

    // Chronological history; per-share prices in cents.
    let history = vec![
        trade(user, TransactionType::Buy, "AAPL", 40, 16900, 90, currency)?,
        trade(user, TransactionType::Buy, "GOOGL", 35, 13250, 75, currency)?,
        trade(user, TransactionType::Buy, "MSFT", 12, 39600, 60, currency)?,
        trade(user, TransactionType::Sell, "AAPL", 15, 17640, 45, currency)?,
        trade(user, TransactionType::Buy, "NVDA", 6, 84200, 40, currency)?,
        dividend(user, "AAPL", 2850, 30, currency)?,
        trade(user, TransactionType::Buy, "AMZN", 25, 17580, 21, currency)?,
        trade(user, TransactionType::Sell, "GOOGL", 10, 12890, 14, currency)?,
        trade(user, TransactionType::Buy, "TSLA", 10, 25130, 10, currency)?,
        trade(user, TransactionType::Sell, "TSLA", 10, 25980, 7, currency)?,
        dividend(user, "MSFT", 930, 5, currency)?,
        trade(user, TransactionType::Buy, "AAPL", 10, 17125, 3, currency)?,
        trade(user, TransactionType::Sell, "MSFT", 2, 41200, 2, currency)?,
    ];
    for tx in &history {
        transactions.add(tx.clone()).await?;
    }

    let positions = analytics::net_positions(&history);
    let total_value = analytics::portfolio_value(&positions, &quotes, currency)?;
    let change = analytics::daily_change(&positions, &quotes);
    let daily_pnl = Money::new(change.max(Decimal::ZERO), currency)?;
    let rate = analytics::success_rate(&history);

    let portfolio = Portfolio::new(
        Uuid::new_v4(),
        user,
        total_value,
        daily_pnl,
        rate,
        positions.len() as u32,
    )?;
    portfolios.save(portfolio).await?;

    // TSLA sits above its target band, META inside it, JPM has no target.
    let items = vec![
        watch(user, "TSLA", 12, "Watching for a pullback entry", Some(23000), true, currency)?,
        watch(user, "META", 20, "Earnings play", Some(50000), true, currency)?,
        watch(user, "JPM", 8, "Financials exposure", None, false, currency)?,
    ];
    for item in items {
        watchlist.insert(item).await?;
    }

    gauge!("seeded_stocks").set(quotes.len() as f64);
    tracing::info!(
        user_id = %user,
        stocks = quotes.len(),
        transactions = history.len(),
        "Seeded demo data"
    );

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn quote(
    symbol: &str,
    name: &str,
    price_cents: i64,
    change_cents: i64,
    gaining: bool,
    volume: u64,
    market_cap: &str,
    currency: &str,
) -> anyhow::Result<Stock> {
    let price = Money::new(Decimal::new(price_cents, 2), currency)?;
    let change = Money::new(Decimal::new(change_cents, 2), currency)?;
    let prev_close = if gaining {
        price.amount() - change.amount()
    } else {
        price.amount() + change.amount()
    };
    let pct = change.amount() / prev_close * Decimal::ONE_HUNDRED;
    let signed = if gaining { pct } else { -pct };

    Ok(Stock::new(
        Uuid::new_v4(),
        StockSymbol::new(symbol)?,
        name,
        price,
        change,
        Percentage::new(signed),
        volume,
        market_cap,
    )?)
}

fn trade(
    user: &str,
    kind: TransactionType,
    symbol: &str,
    shares: i64,
    price_cents: i64,
    days_ago: i64,
    currency: &str,
) -> anyhow::Result<Transaction> {
    Ok(Transaction::new(
        Uuid::new_v4(),
        user,
        kind,
        StockSymbol::new(symbol)?,
        Money::new(Decimal::new(price_cents * shares, 2), currency)?,
        Some(Decimal::from(shares)),
        Utc::now() - Duration::days(days_ago),
    )?)
}

fn dividend(
    user: &str,
    symbol: &str,
    amount_cents: i64,
    days_ago: i64,
    currency: &str,
) -> anyhow::Result<Transaction> {
    Ok(Transaction::new(
        Uuid::new_v4(),
        user,
        TransactionType::Dividend,
        StockSymbol::new(symbol)?,
        Money::new(Decimal::new(amount_cents, 2), currency)?,
        None,
        Utc::now() - Duration::days(days_ago),
    )?)
}

fn watch(
    user: &str,
    symbol: &str,
    days_ago: i64,
    notes: &str,
    target_cents: Option<i64>,
    alert_enabled: bool,
    currency: &str,
) -> anyhow::Result<WatchlistItem> {
    let target_price = match target_cents {
        Some(cents) => Some(Money::new(Decimal::new(cents, 2), currency)?),
        None => None,
    };
    Ok(WatchlistItem::new(
        Uuid::new_v4(),
        user,
        StockSymbol::new(symbol)?,
        Utc::now() - Duration::days(days_ago),
        notes,
        target_price,
        alert_enabled,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{
        InMemoryPortfolioRepository, InMemoryStockRepository, InMemoryTransactionRepository,
        InMemoryWatchlistRepository,
    };

    fn demo_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            base_currency: "USD".into(),
            demo_user_id: "demo".into(),
            seed_demo_data: true,
        }
    }

    #[tokio::test]
    async fn test_seed_populates_all_tables() {
        let stocks = InMemoryStockRepository::new();
        let portfolios = InMemoryPortfolioRepository::new();
        let transactions = InMemoryTransactionRepository::new();
        let watchlist = InMemoryWatchlistRepository::new();

        seed_demo_data(&stocks, &portfolios, &transactions, &watchlist, &demo_config())
            .await
            .unwrap();

        assert_eq!(stocks.list().await.unwrap().len(), 8);
        assert_eq!(transactions.list_by_user("demo").await.unwrap().len(), 13);
        assert_eq!(watchlist.list_by_user("demo").await.unwrap().len(), 3);
        assert!(portfolios.find_by_user("demo").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_seeded_portfolio_agrees_with_history() {
        let stocks = InMemoryStockRepository::new();
        let portfolios = InMemoryPortfolioRepository::new();
        let transactions = InMemoryTransactionRepository::new();
        let watchlist = InMemoryWatchlistRepository::new();

        seed_demo_data(&stocks, &portfolios, &transactions, &watchlist, &demo_config())
            .await
            .unwrap();

        let portfolio = portfolios.find_by_user("demo").await.unwrap().unwrap();
        // Open positions: AAPL 35, GOOGL 25, MSFT 10, NVDA 6, AMZN 25;
        // TSLA was bought and fully sold.
        assert_eq!(portfolio.active_positions(), 5);
        assert!(portfolio.is_diversified());
        assert_eq!(portfolio.total_value().amount(), Decimal::new(2_375_035, 2));
        assert_eq!(portfolio.daily_pnl().amount(), Decimal::new(25_565, 2));
        // 3 winning sells out of 4 matched
        assert_eq!(portfolio.success_rate().value(), Decimal::from(75));
    }

    #[test]
    fn test_quote_derives_percent_from_previous_close() {
        let stock = quote("AAPL", "Apple Inc.", 17825, 215, true, 1, "2.78T", "USD").unwrap();
        // 2.15 / 176.10
        assert_eq!(stock.change_percent().format_signed(), "+1.22%");

        let falling = quote("TSLA", "Tesla Inc.", 24415, 520, false, 1, "777.8B", "USD").unwrap();
        // 5.20 / 249.35
        assert_eq!(falling.change_percent().format_signed(), "-2.09%");
        assert!(!falling.is_gaining());
    }
}
