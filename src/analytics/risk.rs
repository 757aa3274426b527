use rust_decimal::{Decimal, MathematicalOps};
use serde::Serialize;

use crate::domain::{Percentage, Portfolio};

/// Placeholder risk profile derived from portfolio aggregates.
///
/// These are demo figures, not statistics: a single day's return stands in
/// for the whole return series.
#[derive(Debug, Clone, Serialize)]
pub struct RiskMetrics {
    pub volatility: Percentage,
    pub sharpe_ratio: Decimal,
    pub max_drawdown: Percentage,
    pub beta: Decimal,
}

/// Derive the risk placeholders from a stored portfolio row:
/// - volatility: |daily return| annualized by sqrt(252)
/// - sharpe: (annualized return - 2% risk-free) / volatility
/// - max drawdown: (100 - success rate) / 5
/// - beta: 1.00 when diversified, 1.25 otherwise
pub fn risk_metrics(portfolio: &Portfolio) -> RiskMetrics {
    let annualized = portfolio.daily_return().value() * annualization_factor();
    let volatility = Percentage::new(annualized.abs());

    let sharpe_ratio = if annualized.is_zero() {
        Decimal::ZERO
    } else {
        ((annualized - Decimal::TWO) / annualized.abs()).round_dp(2)
    };

    let max_drawdown = Percentage::new(
        (Decimal::ONE_HUNDRED - portfolio.success_rate().value()) / Decimal::from(5),
    );

    let beta = if portfolio.is_diversified() {
        Decimal::new(100, 2) // 1.00
    } else {
        Decimal::new(125, 2) // 1.25
    };

    RiskMetrics {
        volatility,
        sharpe_ratio,
        max_drawdown,
        beta,
    }
}

/// sqrt(252 trading days), the usual daily-to-annual scale.
fn annualization_factor() -> Decimal {
    Decimal::from(252).sqrt().unwrap_or(Decimal::ONE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
