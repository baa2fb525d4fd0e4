//! The asset aggregate: identity, metadata and the backing basket

use super::error::ValuationError;
use super::weighting::AssetWeighting;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the asset backs its Ven value; selects the valuation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightingType {
    /// Weighted mix of real currencies and commodities.
    CurrencyCombo,
    /// Fixed custom peg to Ven, always carried as a single 100% weighting.
    ExternalEntity,
}

impl FromStr for WeightingType {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "currency_combo" => Ok(WeightingType::CurrencyCombo),
            "external_entity" => Ok(WeightingType::ExternalEntity),
            other => Err(ValuationError::UnsupportedWeightingType(other.to_string())),
        }
    }
}

impl fmt::Display for WeightingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeightingType::CurrencyCombo => "currency_combo",
            WeightingType::ExternalEntity => "external_entity",
        })
    }
}

/// A user-submitted backing instrument with its declared basket.
///
/// The weighting list is the only mutable state; the valuation engine
/// replaces it wholesale through [`Asset::set_weightings`] during
/// enrichment. Everything else is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    id: i64,
    weighting_hash: String,
    title: String,
    category: String,
    ticker_symbol: String,
    num_assets: Decimal,
    background_image: String,
    icon_image: String,
    is_approved: bool,
    is_featured: bool,
    authority_user_id: i64,
    weighting_type: WeightingType,
    weightings: Vec<AssetWeighting>,
    submission_date: NaiveDateTime,
}

impl Asset {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        weighting_hash: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        ticker_symbol: impl Into<String>,
        num_assets: Decimal,
        background_image: impl Into<String>,
        icon_image: impl Into<String>,
        is_approved: bool,
        is_featured: bool,
        authority_user_id: i64,
        weighting_type: WeightingType,
        weightings: Vec<AssetWeighting>,
        submission_date: NaiveDateTime,
    ) -> Self {
        Asset {
            id,
            weighting_hash: weighting_hash.into(),
            title: title.into(),
            category: category.into(),
            ticker_symbol: ticker_symbol.into(),
            num_assets,
            background_image: background_image.into(),
            icon_image: icon_image.into(),
            is_approved,
            is_featured,
            authority_user_id,
            weighting_type,
            weightings,
            submission_date,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn weighting_hash(&self) -> &str {
        &self.weighting_hash
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn ticker_symbol(&self) -> &str {
        &self.ticker_symbol
    }

    pub fn num_assets(&self) -> Decimal {
        self.num_assets
    }

    pub fn background_image(&self) -> &str {
        &self.background_image
    }

    pub fn icon_image(&self) -> &str {
        &self.icon_image
    }

    pub fn is_approved(&self) -> bool {
        self.is_approved
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured
    }

    pub fn authority_user_id(&self) -> i64 {
        self.authority_user_id
    }

    pub fn weighting_type(&self) -> WeightingType {
        self.weighting_type
    }

    pub fn weightings(&self) -> &[AssetWeighting] {
        &self.weightings
    }

    pub fn submission_date(&self) -> NaiveDateTime {
        self.submission_date
    }

    /// Replaces the whole basket; used by the valuation engine once the
    /// declared weightings have been enriched with rate amounts.
    pub fn set_weightings(&mut self, weightings: Vec<AssetWeighting>) {
        self.weightings = weightings;
    }

    pub fn is_with_one_weighting(&self) -> bool {
        self.weightings.len() == 1
    }

    /// Finds the weighting carrying the given percentage share. Without an
    /// argument the base-currency share of 100% is looked up, except that
    /// an asset with a single weighting returns it regardless of its
    /// stored percentage.
    pub fn weighting_by_percentage(&self, percentage: Option<Decimal>) -> Option<&AssetWeighting> {
        if percentage.is_none() && self.is_with_one_weighting() {
            return self.weightings.first();
        }

        let wanted = percentage.unwrap_or(Decimal::ONE_HUNDRED);
        self.weightings.iter().find(|w| w.percentage(true) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn submission_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn asset_with(weightings: Vec<AssetWeighting>) -> Asset {
        Asset::new(
            1,
            "weightingHash",
            "title1",
            "category1",
            "tickerSymbol1",
            dec!(234.67),
            "backgroundImage",
            "iconImage",
            true,
            false,
            14795,
            WeightingType::CurrencyCombo,
            weightings,
            submission_date(),
        )
    }

    #[test]
    fn test_returns_instantiated_values_with_one_weighting() {
        let weighting = AssetWeighting::new("currencyName", dec!(23.123456), dec!(100));
        let asset = asset_with(vec![weighting.clone()]);

        assert_eq!(asset.id(), 1);
        assert_eq!(asset.weighting_hash(), "weightingHash");
        assert_eq!(asset.title(), "title1");
        assert_eq!(asset.category(), "category1");
        assert_eq!(asset.ticker_symbol(), "tickerSymbol1");
        assert_eq!(asset.num_assets(), dec!(234.67));
        assert_eq!(asset.background_image(), "backgroundImage");
        assert_eq!(asset.icon_image(), "iconImage");
        assert!(asset.is_approved());
        assert!(!asset.is_featured());
        assert_eq!(asset.authority_user_id(), 14795);
        assert_eq!(asset.weighting_type(), WeightingType::CurrencyCombo);
        assert_eq!(asset.weightings(), &[weighting.clone()]);
        assert!(asset.is_with_one_weighting());
        assert_eq!(asset.weighting_by_percentage(None), Some(&weighting));
        assert_eq!(asset.submission_date(), submission_date());
    }

    #[test]
    fn test_weighting_lookup_by_percentage() {
        let weighting1 = AssetWeighting::new("currencyName1", dec!(11.123456), dec!(80));
        let weighting2 = AssetWeighting::new("currencyName2", dec!(22.123456), dec!(20));
        let asset = asset_with(vec![weighting1.clone(), weighting2.clone()]);

        assert!(!asset.is_with_one_weighting());
        assert_eq!(
            asset.weighting_by_percentage(Some(dec!(80))),
            Some(&weighting1)
        );
        assert_eq!(
            asset.weighting_by_percentage(Some(dec!(20))),
            Some(&weighting2)
        );
        // No base currency with a 100% weighting
        assert_eq!(asset.weighting_by_percentage(None), None);
    }

    #[test]
    fn test_single_weighting_shortcut_ignores_stored_percentage() {
        let weighting = AssetWeighting::new("XAU", dec!(0.0000762543), dec!(50));
        let asset = asset_with(vec![weighting.clone()]);

        assert_eq!(asset.weighting_by_percentage(None), Some(&weighting));
        // An explicit percentage still has to match exactly
        assert_eq!(asset.weighting_by_percentage(Some(dec!(100))), None);
        assert_eq!(
            asset.weighting_by_percentage(Some(dec!(50))),
            Some(&weighting)
        );
    }

    #[test]
    fn test_set_weightings_replaces_the_basket_wholesale() {
        let mut asset = asset_with(vec![
            AssetWeighting::new("CAD", dec!(0), dec!(37)),
            AssetWeighting::new("ETH", dec!(0), dec!(13)),
        ]);
        let replacement = vec![AssetWeighting::new("XAU", dec!(0.0000762543), dec!(100))];

        asset.set_weightings(replacement.clone());
        assert_eq!(asset.weightings(), replacement.as_slice());
    }

    #[test]
    fn test_weighting_type_parses_known_tags() {
        assert_eq!(
            "currency_combo".parse::<WeightingType>().unwrap(),
            WeightingType::CurrencyCombo
        );
        assert_eq!(
            "external_entity".parse::<WeightingType>().unwrap(),
            WeightingType::ExternalEntity
        );
        assert_eq!(WeightingType::CurrencyCombo.to_string(), "currency_combo");
    }

    #[test]
    fn test_weighting_type_rejects_unknown_tags() {
        let err = "spot_basket".parse::<WeightingType>().unwrap_err();
        assert!(matches!(
            err,
            ValuationError::UnsupportedWeightingType(tag) if tag == "spot_basket"
        ));
    }
}
