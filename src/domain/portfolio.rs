use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use super::{DomainError, Money, Percentage};

/// A portfolio counts as diversified once it holds this many open positions.
pub const MIN_DIVERSIFIED_POSITIONS: u32 = 5;

/// Aggregate view of one user's holdings.
///
/// Immutable value holder: updates go through [`Portfolio::with_valuation`],
/// which re-runs the construction invariants and returns a new instance.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    id: Uuid,
    user_id: String,
    total_value: Money,
    daily_pnl: Money,
    success_rate: Percentage,
    active_positions: u32,
}

impl Portfolio {
    pub fn new(
        id: Uuid,
        user_id: &str,
        total_value: Money,
        daily_pnl: Money,
        success_rate: Percentage,
        active_positions: u32,
    ) -> Result<Self, DomainError> {
        if success_rate.value() < Decimal::ZERO
            || success_rate.value() > Decimal::ONE_HUNDRED
        {
            return Err(DomainError::SuccessRateOutOfRange(success_rate.value()));
        }
        if total_value.currency() != daily_pnl.currency() {
            return Err(DomainError::CurrencyMismatch(
                total_value.currency().to_string(),
                daily_pnl.currency().to_string(),
            ));
        }
        Ok(Self {
            id,
            user_id: user_id.to_string(),
            total_value,
            daily_pnl,
            success_rate,
            active_positions,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn total_value(&self) -> &Money {
        &self.total_value
    }

    pub fn daily_pnl(&self) -> &Money {
        &self.daily_pnl
    }

    pub fn success_rate(&self) -> Percentage {
        self.success_rate
    }

    pub fn active_positions(&self) -> u32 {
        self.active_positions
    }

    pub fn is_diversified(&self) -> bool {
        self.active_positions >= MIN_DIVERSIFIED_POSITIONS
    }

    /// Daily return relative to the start-of-day value
    /// (`daily_pnl / (total_value - daily_pnl)`), zero when the base is zero.
    pub fn daily_return(&self) -> Percentage {
        let base = self.total_value.amount() - self.daily_pnl.amount();
        if base <= Decimal::ZERO {
            return Percentage::zero();
        }
        Percentage::new(self.daily_pnl.amount() / base * Decimal::ONE_HUNDRED)
    }

    pub fn with_valuation(
        &self,
        total_value: Money,
        daily_pnl: Money,
        success_rate: Percentage,
        active_positions: u32,
    ) -> Result<Portfolio, DomainError> {
        Self::new(
            self.id,
            &self.user_id,
            total_value,
            daily_pnl,
            success_rate,
            active_positions,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
