//! A single percentage allocation inside an asset's backing basket

use super::money::{DISPLAY_PRECISION, truncate_to_places};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// One declared allocation: this much of the asset's value comes from
/// `currency_name`, at the currency's Ven rate `currency_amount`.
///
/// Every amount accessor takes a `raw` flag. Raw values are the stored
/// decimals at full precision and feed the valuation arithmetic; non-raw
/// values are cut to [`DISPLAY_PRECISION`] fractional digits for
/// presentation, never rounded up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWeighting {
    currency_name: String,
    currency_amount: Decimal,
    percentage: Decimal,
}

impl AssetWeighting {
    pub fn new(
        currency_name: impl Into<String>,
        currency_amount: Decimal,
        percentage: Decimal,
    ) -> Self {
        AssetWeighting {
            currency_name: currency_name.into(),
            currency_amount,
            percentage,
        }
    }

    pub fn currency_name(&self) -> &str {
        &self.currency_name
    }

    pub fn currency_amount(&self, raw: bool) -> Decimal {
        if raw {
            self.currency_amount
        } else {
            truncate_to_places(self.currency_amount, DISPLAY_PRECISION)
        }
    }

    pub fn percentage(&self, raw: bool) -> Decimal {
        if raw {
            self.percentage
        } else {
            truncate_to_places(self.percentage, DISPLAY_PRECISION)
        }
    }

    /// Share of one Ven contributed by this weighting:
    /// `(currency_amount / 100) * percentage`. The non-raw variant
    /// truncates the result once on top of the non-raw inputs.
    pub fn percentage_amount(&self, raw: bool) -> Decimal {
        let amount = (self.currency_amount(raw) / Decimal::ONE_HUNDRED) * self.percentage(raw);
        if raw {
            amount
        } else {
            truncate_to_places(amount, DISPLAY_PRECISION)
        }
    }

    /// Structured view of this weighting. Verbose mode adds the audit-log
    /// fields: the calculation spelled out as text and the percentage
    /// amount padded to a fixed ten decimal places.
    pub fn snapshot(&self, verbose: bool, raw: bool) -> WeightingSnapshot {
        let percentage_amount = self.percentage_amount(raw);
        let mut snapshot = WeightingSnapshot {
            currency_name: self.currency_name.clone(),
            currency_amount: self.currency_amount(raw),
            percentage: self.percentage,
            percentage_amount,
            verbose_calc_percentage_amount: None,
            verbose_currency_amount: None,
            verbose_percentage_amount: None,
        };

        if verbose {
            snapshot.verbose_calc_percentage_amount = Some(format!(
                "{}({}) * 0.{}",
                self.currency_amount, self.currency_name, self.percentage
            ));
            snapshot.verbose_currency_amount = Some(self.currency_amount);
            snapshot.verbose_percentage_amount = Some(format!("{percentage_amount:.10}"));
        }

        snapshot
    }
}

impl fmt::Display for AssetWeighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.snapshot(false, true);
        match serde_json::to_string(&snapshot) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeightingSnapshot {
    pub currency_name: String,
    pub currency_amount: Decimal,
    pub percentage: Decimal,
    pub percentage_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_calc_percentage_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_currency_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose_percentage_amount: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_accessors_return_stored_values() {
        let weighting = AssetWeighting::new("CAD", dec!(23.123456789), dec!(37));
        assert_eq!(weighting.currency_name(), "CAD");
        assert_eq!(weighting.currency_amount(true), dec!(23.123456789));
        assert_eq!(weighting.percentage(true), dec!(37));
    }

    #[test]
    fn test_non_raw_accessors_truncate_to_four_places() {
        let weighting = AssetWeighting::new("CAD", dec!(23.123456789), dec!(37.98765));
        assert_eq!(weighting.currency_amount(false), dec!(23.1234));
        assert_eq!(weighting.percentage(false), dec!(37.9876));
    }

    #[test]
    fn test_percentage_amount_identity() {
        let weighting = AssetWeighting::new("XAU", dec!(0.0000762543), dec!(50));
        assert_eq!(
            weighting.percentage_amount(true),
            (weighting.currency_amount(true) / dec!(100)) * weighting.percentage(true)
        );
        assert_eq!(weighting.percentage_amount(true), dec!(0.00003812715));
    }

    #[test]
    fn test_non_raw_percentage_amount_truncates_the_result() {
        let weighting = AssetWeighting::new("CAD", dec!(0.1262628972), dec!(37));
        // raw: 0.046717271964; non-raw inputs: (0.1262 / 100) * 37 = 0.046694
        assert_eq!(weighting.percentage_amount(true), dec!(0.046717271964));
        assert_eq!(weighting.percentage_amount(false), dec!(0.0466));
    }

    #[test]
    fn test_verbose_snapshot_carries_audit_fields() {
        let weighting = AssetWeighting::new("currencyName", dec!(23.123456), dec!(100));
        let snapshot = weighting.snapshot(true, true);

        assert_eq!(
            snapshot.verbose_calc_percentage_amount.as_deref(),
            Some("23.123456(currencyName) * 0.100")
        );
        assert_eq!(snapshot.verbose_currency_amount, Some(dec!(23.123456)));
        // Formatted to ten places with zero padding, not truncated
        assert_eq!(
            snapshot.verbose_percentage_amount.as_deref(),
            Some("23.1234560000")
        );
    }

    #[test]
    fn test_terse_snapshot_has_no_verbose_fields() {
        let weighting = AssetWeighting::new("ETH", dec!(0.0001658963), dec!(13));
        let snapshot = weighting.snapshot(false, true);

        assert_eq!(snapshot.currency_name, "ETH");
        assert_eq!(snapshot.currency_amount, dec!(0.0001658963));
        assert_eq!(snapshot.percentage, dec!(13));
        assert!(snapshot.verbose_calc_percentage_amount.is_none());
        assert!(snapshot.verbose_currency_amount.is_none());
        assert!(snapshot.verbose_percentage_amount.is_none());
    }

    #[test]
    fn test_display_renders_snapshot_as_json() {
        let weighting = AssetWeighting::new("CAD", dec!(0.5), dec!(100));
        let json: serde_json::Value = serde_json::from_str(&weighting.to_string()).unwrap();
        assert_eq!(json["currency_name"], "CAD");
        assert!(json.get("verbose_currency_amount").is_none());
    }
}
