use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::DomainError;

/// A non-negative monetary amount in a single currency.
///
/// Amounts are rounded to 2 decimal places on construction and after every
/// arithmetic operation, so `m.add(x)?.subtract(x)? == m` holds. Money is a
/// magnitude; direction (gain/loss) is carried by signed percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: String,
}

impl Money {
    pub fn new(amount: Decimal, currency: &str) -> Result<Self, DomainError> {
        let code = currency.trim().to_uppercase();
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::InvalidCurrency(currency.to_string()));
        }
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount(amount));
        }
        Ok(Self {
            amount: round_amount(amount),
            currency: code,
        })
    }

    pub fn zero(currency: &str) -> Result<Self, DomainError> {
        Self::new(Decimal::ZERO, currency)
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn add(&self, other: &Money) -> Result<Money, DomainError> {
        self.ensure_same_currency(other)?;
        Ok(Money {
            amount: round_amount(self.amount + other.amount),
            currency: self.currency.clone(),
        })
    }

    /// Subtraction stays within the non-negative invariant: taking away more
    /// than is available is an error, not a signed result.
    pub fn subtract(&self, other: &Money) -> Result<Money, DomainError> {
        self.ensure_same_currency(other)?;
        let result = self.amount - other.amount;
        if result < Decimal::ZERO {
            return Err(DomainError::NegativeAmount(result));
        }
        Ok(Money {
            amount: round_amount(result),
            currency: self.currency.clone(),
        })
    }

    pub fn multiply(&self, factor: Decimal) -> Result<Money, DomainError> {
        if factor < Decimal::ZERO {
            return Err(DomainError::NegativeFactor(factor));
        }
        Ok(Money {
            amount: round_amount(self.amount * factor),
            currency: self.currency.clone(),
        })
    }

    /// Display string with thousands grouping: `$1,234.56`, `€99.00`,
    /// `1,234.56 CHF` for currencies without a well-known symbol.
    pub fn format(&self) -> String {
        let rendered = format!("{:.2}", self.amount);
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, f),
            None => (rendered.as_str(), "00"),
        };
        let grouped = group_thousands(int_part);
        match currency_symbol(&self.currency) {
            Some(symbol) => format!("{symbol}{grouped}.{frac_part}"),
            None => format!("{grouped}.{frac_part} {}", self.currency),
        }
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch(
                self.currency.clone(),
                other.currency.clone(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == offset {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
