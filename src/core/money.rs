//! Money value object and the truncation policy for displayed amounts

use super::currency::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fractional digits kept when presenting a non-raw amount.
pub const DISPLAY_PRECISION: u32 = 4;

/// Cuts `amount` to `precision` fractional digits without rounding in
/// either direction, so a presented value never overstates the true one.
/// Works on the decimal representation; amounts with fewer fractional
/// digits pass through unchanged.
pub fn truncate_to_places(amount: Decimal, precision: u32) -> Decimal {
    amount.trunc_with_scale(precision)
}

/// An amount of a specific currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Money { amount, currency }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_truncates_by_cut_never_rounds() {
        assert_eq!(
            truncate_to_places(dec!(23.123456789), DISPLAY_PRECISION),
            dec!(23.1234)
        );
        // A round-half-up scheme would have produced 23.1235
        assert_ne!(
            truncate_to_places(dec!(23.123456789), DISPLAY_PRECISION),
            dec!(23.1235)
        );
        assert_eq!(truncate_to_places(dec!(0.99999), 4), dec!(0.9999));
    }

    #[test]
    fn test_truncation_leaves_short_amounts_unchanged() {
        assert_eq!(
            truncate_to_places(dec!(23.1), DISPLAY_PRECISION).to_string(),
            "23.1"
        );
        assert_eq!(truncate_to_places(dec!(42), DISPLAY_PRECISION), dec!(42));
    }

    #[test]
    fn test_truncation_of_negative_amounts_is_toward_zero() {
        assert_eq!(
            truncate_to_places(dec!(-23.123456789), DISPLAY_PRECISION),
            dec!(-23.1234)
        );
    }

    #[test]
    fn test_truncation_of_tiny_magnitudes() {
        assert_eq!(
            truncate_to_places(dec!(0.0000762543), DISPLAY_PRECISION),
            dec!(0.0000)
        );
    }

    #[test]
    fn test_money_display() {
        let money = Money::new(dec!(0.0467), Currency::ven());
        assert_eq!(money.to_string(), "0.0467 VEN");
        assert_eq!(money.amount(), dec!(0.0467));
        assert_eq!(money.currency(), &Currency::ven());
    }
}
