use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DomainError, Money, StockSymbol};

// ---------------------------------------------------------------------------
// TransactionType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Sell => "sell",
            TransactionType::Dividend => "dividend",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

/// A single portfolio transaction.
///
/// `amount` is the unsigned total of the transaction; `shares` is required
/// and positive for buys and sells, optional for dividends.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    id: Uuid,
    user_id: String,
    kind: TransactionType,
    symbol: StockSymbol,
    amount: Money,
    shares: Option<Decimal>,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        id: Uuid,
        user_id: &str,
        kind: TransactionType,
        symbol: StockSymbol,
        amount: Money,
        shares: Option<Decimal>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if let Some(count) = shares {
            if count <= Decimal::ZERO {
                return Err(DomainError::InvalidShares(count));
            }
        }
        if matches!(kind, TransactionType::Buy | TransactionType::Sell)
            && shares.is_none()
        {
            return Err(DomainError::SharesRequired(kind));
        }
        Ok(Self {
            id,
            user_id: user_id.to_string(),
            kind,
            symbol,
            amount,
            shares,
            timestamp,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn symbol(&self) -> &StockSymbol {
        &self.symbol
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn shares(&self) -> Option<Decimal> {
        self.shares
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Per-share price for transactions that carry a share count.
    pub fn price_per_share(&self) -> Option<Decimal> {
        self.shares
            .filter(|count| !count.is_zero())
            .map(|count| self.amount.amount() / count)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
