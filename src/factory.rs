//! Builds assets from raw stored records

use crate::core::{Asset, AssetWeighting, ValuationError, WeightingType};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SUBMISSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One row of the asset table, as persisted by the submission surface.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AssetRecord {
    pub id: i64,
    pub hash: String,
    pub title: String,
    pub category: String,
    pub ticker_symbol: String,
    pub num_assets: Decimal,
    #[serde(default)]
    pub background_image: String,
    #[serde(default)]
    pub icon_image: String,
    pub is_approved: i64,
    pub is_featured: i64,
    pub user_id: i64,
    pub weighting_type: String,
    /// JSON array of `{"type": <currency>, "amount": <percentage>}`
    /// objects, exactly as stored.
    pub weightings: String,
    pub created_at: String,
}

/// Stored shape of one weighting: `type` names the currency and `amount`
/// is its percentage share. The per-currency rate amount is not persisted;
/// enrichment fills it in before any valuation.
#[derive(Debug, Deserialize)]
struct StoredWeighting {
    #[serde(rename = "type")]
    currency: String,
    #[serde(default)]
    amount: Decimal,
}

pub struct AssetFactory;

impl AssetFactory {
    /// Maps a stored record onto an [`Asset`]. Fails on an unknown
    /// weighting-type tag, a bad submission timestamp, or weighting JSON
    /// that does not decode; no partially valid asset is ever built.
    pub fn from_record(record: &AssetRecord) -> Result<Asset, ValuationError> {
        let weighting_type: WeightingType = record.weighting_type.parse()?;

        let stored: Vec<StoredWeighting> = serde_json::from_str(&record.weightings)?;
        let weightings = stored
            .into_iter()
            .map(|w| AssetWeighting::new(w.currency, Decimal::ZERO, w.amount))
            .collect();

        let submission_date =
            NaiveDateTime::parse_from_str(&record.created_at, SUBMISSION_DATE_FORMAT)?;

        Ok(Asset::new(
            record.id,
            record.hash.clone(),
            record.title.clone(),
            record.category.clone(),
            record.ticker_symbol.clone(),
            record.num_assets,
            record.background_image.clone(),
            record.icon_image.clone(),
            record.is_approved != 0,
            record.is_featured != 0,
            record.user_id,
            weighting_type,
            weightings,
            submission_date,
        ))
    }
}
