//! Rate provider used when rebuilding the historical rates table

use crate::core::{Asset, Currency, CurrencyRate, CurrencyRatesProvider};
use crate::engine::ValuationEngine;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Produces a single rate row for one historical asset at a time.
///
/// The rebuild loop walks the calendar one day and one asset at a time:
/// the target asset must be set through [`set_historical_asset`] before
/// each query. The provider keeps no history of prior days; its one rate
/// is the asset's one-Ven valuation, delegated to the engine.
///
/// [`set_historical_asset`]: HistoricalAssetAwareRatesProvider::set_historical_asset
pub struct HistoricalAssetAwareRatesProvider {
    engine: Arc<ValuationEngine>,
    historical_asset: RwLock<Option<Asset>>,
}

impl HistoricalAssetAwareRatesProvider {
    pub fn new(engine: Arc<ValuationEngine>) -> Self {
        HistoricalAssetAwareRatesProvider {
            engine,
            historical_asset: RwLock::new(None),
        }
    }

    pub fn set_historical_asset(&self, asset: Asset) {
        *self.historical_asset.write().unwrap() = Some(asset);
    }
}

#[async_trait]
impl CurrencyRatesProvider for HistoricalAssetAwareRatesProvider {
    async fn get_by_primary_currency_symbol(
        &self,
        _primary: &Currency,
    ) -> Result<Vec<CurrencyRate>> {
        let asset = self
            .historical_asset
            .read()
            .unwrap()
            .clone()
            .context("No historical asset set; call set_historical_asset before querying")?;

        let value = self.engine.asset_amount_for_one_ven(&asset).await?;
        Ok(vec![CurrencyRate::new(
            asset.ticker_symbol(),
            value.amount(),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Asset, AssetWeighting, WeightingType};
    use crate::providers::StoredRatesProvider;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn engine() -> Arc<ValuationEngine> {
        Arc::new(ValuationEngine::new(Arc::new(StoredRatesProvider::new(
            &[],
        ))))
    }

    fn pegged_asset(ticker: &str, peg: Decimal) -> Asset {
        Asset::new(
            1,
            "hash",
            "title",
            "category",
            ticker,
            dec!(100),
            "bg",
            "icon",
            true,
            false,
            7,
            WeightingType::ExternalEntity,
            vec![AssetWeighting::new("Ven", peg, dec!(100))],
            NaiveDate::from_ymd_opt(2019, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_returns_one_rate_for_the_current_historical_asset() {
        let provider = HistoricalAssetAwareRatesProvider::new(engine());
        provider.set_historical_asset(pegged_asset("uXYZ", dec!(13)));

        let rates = provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
            .unwrap();

        assert_eq!(
            rates,
            vec![CurrencyRate::new("uXYZ", Decimal::ONE / dec!(13))]
        );
    }

    #[tokio::test]
    async fn test_replacing_the_historical_asset_changes_the_rate() {
        let provider = HistoricalAssetAwareRatesProvider::new(engine());

        provider.set_historical_asset(pegged_asset("uAAA", dec!(2)));
        let first = provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
            .unwrap();

        provider.set_historical_asset(pegged_asset("uBBB", dec!(4)));
        let second = provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
            .unwrap();

        assert_eq!(first, vec![CurrencyRate::new("uAAA", dec!(0.5))]);
        assert_eq!(second, vec![CurrencyRate::new("uBBB", dec!(0.25))]);
    }

    #[tokio::test]
    async fn test_querying_without_an_asset_set_is_an_error() {
        let provider = HistoricalAssetAwareRatesProvider::new(engine());

        let err = provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("No historical asset set"));
    }
}
