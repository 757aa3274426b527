use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Percentage, Transaction, TransactionType};

/// Performance tier of a portfolio's daily snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceStatus {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PerformanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceStatus::Excellent => "excellent",
            PerformanceStatus::Good => "good",
            PerformanceStatus::Average => "average",
            PerformanceStatus::Poor => "poor",
        }
    }
}

impl fmt::Display for PerformanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a daily snapshot, evaluated top-down:
/// - daily return >= 2% and success rate >= 80% -> excellent
/// - daily return >= 1% and success rate >= 70% -> good
/// - daily return >= 0% and success rate >= 50% -> average
/// - anything else -> poor
pub fn classify_performance(
    daily_return: Percentage,
    success_rate: Percentage,
) -> PerformanceStatus {
    let dr = daily_return.value();
    let sr = success_rate.value();

    if dr >= Decimal::TWO && sr >= Decimal::from(80) {
        PerformanceStatus::Excellent
    } else if dr >= Decimal::ONE && sr >= Decimal::from(70) {
        PerformanceStatus::Good
    } else if dr >= Decimal::ZERO && sr >= Decimal::from(50) {
        PerformanceStatus::Average
    } else {
        PerformanceStatus::Poor
    }
}

// ---------------------------------------------------------------------------
// Success rate
// ---------------------------------------------------------------------------

/// Fraction of sells priced above their matched buy, as a percentage.
///
/// A sell is matched to the EARLIEST buy of the same symbol with an earlier
/// timestamp, not to the remaining open lot (no FIFO/LIFO accounting).
/// Sells with no prior buy are skipped entirely, and a history without a
/// single matched sell scores 0%.
pub fn success_rate(transactions: &[Transaction]) -> Percentage {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    ordered.sort_by_key(|tx| tx.timestamp());

    let mut matched = 0u32;
    let mut wins = 0u32;

    for (i, tx) in ordered.iter().enumerate() {
        if tx.kind() != TransactionType::Sell {
            continue;
        }
        let Some(sell_price) = tx.price_per_share() else {
            continue;
        };
        let buy_price = ordered[..i]
            .iter()
            .find(|prior| {
                prior.kind() == TransactionType::Buy && prior.symbol() == tx.symbol()
            })
            .and_then(|prior| prior.price_per_share());
        let Some(buy_price) = buy_price else {
            continue;
        };

        matched += 1;
        if sell_price > buy_price {
            wins += 1;
        }
    }

    if matched == 0 {
        return Percentage::zero();
    }
    Percentage::new(Decimal::from(wins) / Decimal::from(matched) * Decimal::ONE_HUNDRED)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
