//! Weighted multi-currency valuation engine

use crate::core::{
    Asset, AssetWeighting, Currency, CurrencyRate, CurrencyRatesProvider, Money, ValuationError,
    WeightingType,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Values assets against a Ven rate table fetched at most once per engine
/// instance. The cached table is never invalidated; callers needing fresh
/// rates construct a new engine.
pub struct ValuationEngine {
    rates_provider: Arc<dyn CurrencyRatesProvider>,
    rates: Mutex<Option<Arc<Vec<CurrencyRate>>>>,
}

impl ValuationEngine {
    pub fn new(rates_provider: Arc<dyn CurrencyRatesProvider>) -> Self {
        ValuationEngine {
            rates_provider,
            rates: Mutex::new(None),
        }
    }

    async fn ven_rates(&self) -> Result<Arc<Vec<CurrencyRate>>, ValuationError> {
        let mut cached = self.rates.lock().await;
        if let Some(rates) = cached.as_ref() {
            debug!("Rate table cache hit");
            return Ok(Arc::clone(rates));
        }

        debug!("Rate table cache miss, querying provider");
        let rates = self
            .rates_provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
            .map_err(ValuationError::RateLookup)?;
        let rates = Arc::new(rates);
        *cached = Some(Arc::clone(&rates));
        Ok(rates)
    }

    /// Resolves each declared weighting against the rate table, preserving
    /// the declared order. A weighting whose currency has no rate row is
    /// dropped, so an incomplete rate feed degrades the basket instead of
    /// corrupting the valuation.
    pub async fn enriched_weightings(
        &self,
        asset: &Asset,
    ) -> Result<Vec<AssetWeighting>, ValuationError> {
        // Both backing types share the enrichment path today; the read
        // stays so a future backing type can branch here.
        let _ = asset.weighting_type();

        let rates = self.ven_rates().await?;
        let mut enriched = Vec::with_capacity(asset.weightings().len());
        for weighting in asset.weightings() {
            match rates
                .iter()
                .find(|rate| rate.symbol() == weighting.currency_name())
            {
                Some(rate) => enriched.push(AssetWeighting::new(
                    weighting.currency_name(),
                    rate.amount(),
                    weighting.percentage(true),
                )),
                None => debug!(
                    currency = weighting.currency_name(),
                    "No rate for weighting currency, dropping it"
                ),
            }
        }

        Ok(enriched)
    }

    /// Enriches the asset in place, replacing its basket wholesale.
    pub async fn enrich_asset(&self, asset: &mut Asset) -> Result<(), ValuationError> {
        let enriched = self.enriched_weightings(asset).await?;
        asset.set_weightings(enriched);
        Ok(())
    }

    /// Total value of the asset expressed in Ven.
    ///
    /// Currency combos are the weighted sum of per-currency Ven
    /// equivalents over the already enriched basket. External entities are
    /// stored the opposite way round ("this many of me equal one Ven"), so
    /// their value is the reciprocal of the single peg amount.
    pub async fn asset_amount_for_one_ven(&self, asset: &Asset) -> Result<Money, ValuationError> {
        let amount = match asset.weighting_type() {
            WeightingType::CurrencyCombo => {
                debug!(
                    ticker = asset.ticker_symbol(),
                    "Summing currency combo weightings"
                );
                asset
                    .weightings()
                    .iter()
                    .map(|weighting| weighting.percentage_amount(true))
                    .sum::<Decimal>()
            }
            WeightingType::ExternalEntity => {
                debug!(
                    ticker = asset.ticker_symbol(),
                    "Inverting external entity peg"
                );
                let peg = asset
                    .weightings()
                    .first()
                    .ok_or_else(|| {
                        ValuationError::MissingWeighting(asset.ticker_symbol().to_string())
                    })?
                    .currency_amount(true);
                Decimal::ONE
                    .checked_div(peg)
                    .ok_or(ValuationError::InvalidPegAmount(peg))?
            }
        };

        Ok(Money::new(amount, Currency::ven()))
    }
}
