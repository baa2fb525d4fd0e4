//! Domain errors for asset construction and valuation

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValuationError {
    /// An external entity peg must divide one Ven; a zero peg would value
    /// the asset as infinity.
    #[error("invalid peg amount {0} for external entity asset, must be non-zero")]
    InvalidPegAmount(Decimal),

    #[error("unsupported weighting type '{0}'")]
    UnsupportedWeightingType(String),

    #[error("malformed weighting data: {0}")]
    MalformedWeightingData(#[from] serde_json::Error),

    #[error("asset '{0}' carries no weightings")]
    MissingWeighting(String),

    #[error("invalid submission date: {0}")]
    InvalidSubmissionDate(#[from] chrono::ParseError),

    #[error("rate lookup failed: {0}")]
    RateLookup(#[source] anyhow::Error),
}
