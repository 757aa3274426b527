use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A signed percentage value, rounded to 2 decimal places on construction.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn add(&self, other: &Percentage) -> Percentage {
        Percentage::new(self.0 + other.0)
    }

    pub fn subtract(&self, other: &Percentage) -> Percentage {
        Percentage::new(self.0 - other.0)
    }

    pub fn abs(&self) -> Percentage {
        Percentage(self.0.abs())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Unsigned display form: `75.00%`.
    pub fn format(&self) -> String {
        format!("{:.2}%", self.0)
    }

    /// Explicitly signed display form: `+1.22%` / `-2.09%`.
    pub fn format_signed(&self) -> String {
        if self.is_negative() {
            format!("{:.2}%", self.0)
        } else {
            format!("+{:.2}%", self.0)
        }
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rounds_to_two_decimals() {
        let p = Percentage::new(Decimal::new(1005, 3)); // 1.005
        assert_eq!(p.value(), Decimal::new(101, 2)); // 1.01
    }

    #[test]
    fn test_new_rounds_negative_away_from_zero() {
        let p = Percentage::new(Decimal::new(-20854, 4)); // -2.0854
        assert_eq!(p.value(), Decimal::new(-209, 2)); // -2.09
    }

    #[test]
    fn test_sign_queries() {
        assert!(Percentage::new(Decimal::ONE).is_positive());
        assert!(Percentage::new(Decimal::new(-1, 0)).is_negative());
        assert!(Percentage::zero().is_zero());
        assert!(!Percentage::zero().is_positive());
        assert!(!Percentage::zero().is_negative());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = Percentage::new(Decimal::new(150, 2)); // 1.50
        let b = Percentage::new(Decimal::new(250, 2)); // 2.50
        assert_eq!(a.add(&b).value(), Decimal::new(400, 2));
        assert_eq!(a.subtract(&b).value(), Decimal::new(-100, 2));
    }

    #[test]
    fn test_format_pads_to_two_decimals() {
        assert_eq!(Percentage::new(Decimal::from(75)).format(), "75.00%");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(
            Percentage::new(Decimal::new(122, 2)).format_signed(),
            "+1.22%"
        );
        assert_eq!(
            Percentage::new(Decimal::new(-209, 2)).format_signed(),
            "-2.09%"
        );
        assert_eq!(Percentage::zero().format_signed(), "+0.00%");
    }

    #[test]
    fn test_ordering() {
        let low = Percentage::new(Decimal::new(-28, 2));
        let high = Percentage::new(Decimal::new(82, 2));
        assert!(high > low);
    }
}
