//! Live rate provider backed by the persisted rate table

use crate::config::RateEntry;
use crate::core::{Currency, CurrencyRate, CurrencyRatesProvider};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Serves the rate rows recorded for each primary currency. The table is
/// loaded once from the configured store; keeping it fresh is the store's
/// concern, not this provider's.
pub struct StoredRatesProvider {
    rates_by_primary: HashMap<String, Vec<CurrencyRate>>,
}

impl StoredRatesProvider {
    pub fn new(entries: &[RateEntry]) -> Self {
        let mut rates_by_primary: HashMap<String, Vec<CurrencyRate>> = HashMap::new();
        for entry in entries {
            rates_by_primary
                .entry(entry.primary.clone())
                .or_default()
                .push(CurrencyRate::new(entry.symbol.clone(), entry.amount));
        }

        StoredRatesProvider { rates_by_primary }
    }
}

#[async_trait]
impl CurrencyRatesProvider for StoredRatesProvider {
    async fn get_by_primary_currency_symbol(
        &self,
        primary: &Currency,
    ) -> Result<Vec<CurrencyRate>> {
        let rates = self
            .rates_by_primary
            .get(primary.symbol())
            .cloned()
            .unwrap_or_default();
        debug!(
            primary = primary.symbol(),
            rows = rates.len(),
            "Resolved stored rates"
        );
        Ok(rates)
    }
}
