use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    DomainError, Money, Percentage, Stock, StockSymbol, Transaction, TransactionType,
};

/// Net share count for one held symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetPosition {
    pub symbol: StockSymbol,
    pub shares: Decimal,
}

/// One slice of the portfolio's allocation breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Allocation {
    pub symbol: StockSymbol,
    pub value: Money,
    pub weight: Percentage,
}

// ---------------------------------------------------------------------------
// Net positions
// ---------------------------------------------------------------------------

/// Fold a transaction history into net share positions per symbol.
///
/// Buys add shares, sells subtract, dividends carry no share movement.
/// Only symbols with a positive net count survive; output is sorted by
/// symbol so repeated runs over the same history agree.
pub fn net_positions(transactions: &[Transaction]) -> Vec<NetPosition> {
    let mut totals: HashMap<StockSymbol, Decimal> = HashMap::new();

    for tx in transactions {
        let delta = match tx.kind() {
            TransactionType::Buy => tx.shares(),
            TransactionType::Sell => tx.shares().map(|count| -count),
            TransactionType::Dividend => None,
        };
        let Some(delta) = delta else { continue };
        *totals.entry(tx.symbol().clone()).or_insert(Decimal::ZERO) += delta;
    }

    let mut positions: Vec<NetPosition> = totals
        .into_iter()
        .filter(|(_, shares)| *shares > Decimal::ZERO)
        .map(|(symbol, shares)| NetPosition { symbol, shares })
        .collect();
    positions.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    positions
}

// ---------------------------------------------------------------------------
// Valuation
// ---------------------------------------------------------------------------

/// Total market value of the held positions in the base currency.
///
/// Positions without a current quote contribute nothing; an empty
/// portfolio values to zero.
pub fn portfolio_value(
    positions: &[NetPosition],
    quotes: &[Stock],
    base_currency: &str,
) -> Result<Money, DomainError> {
    let by_symbol = index_quotes(quotes);
    let mut total = Money::zero(base_currency)?;

    for position in positions {
        let Some(stock) = by_symbol.get(&position.symbol) else {
            continue;
        };
        let value = stock.price().multiply(position.shares)?;
        total = total.add(&value)?;
    }
    Ok(total)
}

/// Signed sum of share-weighted daily moves across the held positions.
///
/// The stock's `change` field is a magnitude; the sign comes from its
/// `change_percent`.
pub fn daily_change(positions: &[NetPosition], quotes: &[Stock]) -> Decimal {
    let by_symbol = index_quotes(quotes);
    let mut change = Decimal::ZERO;

    for position in positions {
        let Some(stock) = by_symbol.get(&position.symbol) else {
            continue;
        };
        let per_share = if stock.change_percent().is_negative() {
            -stock.change().amount()
        } else {
            stock.change().amount()
        };
        change += per_share * position.shares;
    }
    change
}

/// Per-symbol market value and portfolio weight, heaviest first.
///
/// Weights are value / total × 100; over a fully quoted portfolio they sum
/// to ~100 within rounding. Unquoted positions are skipped, and a
/// portfolio with no quoted value yields no rows.
pub fn allocation(
    positions: &[NetPosition],
    quotes: &[Stock],
) -> Result<Vec<Allocation>, DomainError> {
    let by_symbol = index_quotes(quotes);

    let mut values: Vec<(StockSymbol, Money)> = Vec::new();
    for position in positions {
        let Some(stock) = by_symbol.get(&position.symbol) else {
            continue;
        };
        let value = stock.price().multiply(position.shares)?;
        values.push((position.symbol.clone(), value));
    }

    let total: Decimal = values.iter().map(|(_, value)| value.amount()).sum();
    if total.is_zero() {
        return Ok(Vec::new());
    }

    let mut slices: Vec<Allocation> = values
        .into_iter()
        .map(|(symbol, value)| {
            let weight = Percentage::new(value.amount() / total * Decimal::ONE_HUNDRED);
            Allocation {
                symbol,
                value,
                weight,
            }
        })
        .collect();
    slices.sort_by(|a, b| b.weight.cmp(&a.weight));
    Ok(slices)
}

fn index_quotes(quotes: &[Stock]) -> HashMap<&StockSymbol, &Stock> {
    quotes.iter().map(|stock| (stock.symbol(), stock)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
