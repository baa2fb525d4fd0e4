//! Core domain types for basket valuation

pub mod asset;
pub mod currency;
pub mod error;
pub mod money;
pub mod weighting;

// Re-export main types for cleaner imports
pub use asset::{Asset, WeightingType};
pub use currency::{Currency, CurrencyRate, CurrencyRatesProvider};
pub use error::ValuationError;
pub use money::{DISPLAY_PRECISION, Money, truncate_to_places};
pub use weighting::{AssetWeighting, WeightingSnapshot};
