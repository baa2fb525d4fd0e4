//! Currency value types and the rate provider capability

use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ticker symbol of the reference unit every asset is valued against.
pub const VEN_SYMBOL: &str = "VEN";

/// A currency identified by its ticker symbol. Identity is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Currency(symbol.into())
    }

    /// The reference currency backing every basket valuation.
    pub fn ven() -> Self {
        Currency(VEN_SYMBOL.to_string())
    }

    pub fn symbol(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How many units of `symbol` equal one unit of the primary currency the
/// rate was requested for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRate {
    symbol: String,
    amount: Decimal,
}

impl CurrencyRate {
    pub fn new(symbol: impl Into<String>, amount: Decimal) -> Self {
        CurrencyRate {
            symbol: symbol.into(),
            amount,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[async_trait]
pub trait CurrencyRatesProvider: Send + Sync {
    /// Exchange rates for one unit of the given primary currency.
    /// ex: pass `VEN` to find out how much of each backing currency one
    /// Ven buys.
    async fn get_by_primary_currency_symbol(
        &self,
        primary: &Currency,
    ) -> Result<Vec<CurrencyRate>>;
}
