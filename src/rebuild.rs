//! Day-by-day rebuild of the historical rates table

use crate::core::{Asset, Currency, CurrencyRatesProvider};
use crate::providers::HistoricalAssetAwareRatesProvider;
use crate::ui;
use chrono::NaiveDate;
use comfy_table::Cell;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::warn;

/// One rebuilt row of the historical rate table, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalRateRow {
    pub day: NaiveDate,
    pub symbol: String,
    pub amount: Decimal,
}

/// Values one asset per calendar day through the historical-aware provider
/// and collects the resulting rate rows. A failing asset is logged and
/// skipped; it never aborts the rest of the batch.
pub async fn rebuild_rate_rows(
    targets: impl IntoIterator<Item = (NaiveDate, Asset)>,
    provider: &HistoricalAssetAwareRatesProvider,
) -> Vec<HistoricalRateRow> {
    let mut rows = Vec::new();
    for (day, asset) in targets {
        let ticker = asset.ticker_symbol().to_string();
        provider.set_historical_asset(asset);

        match provider
            .get_by_primary_currency_symbol(&Currency::ven())
            .await
        {
            Ok(rates) => {
                for rate in rates {
                    rows.push(HistoricalRateRow {
                        day,
                        symbol: rate.symbol().to_string(),
                        amount: rate.amount(),
                    });
                }
            }
            Err(e) => warn!(ticker = %ticker, day = %day, "Skipping historical rate row: {e}"),
        }
    }

    rows
}

pub fn display_rows_as_table(rows: &[HistoricalRateRow]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Day"),
        ui::header_cell("Symbol"),
        ui::header_cell("Rate (VEN)"),
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.day.to_string()),
            Cell::new(&row.symbol),
            ui::amount_cell(row.amount),
        ]);
    }

    format!(
        "Rebuilt rate rows: {}\n\n{}",
        ui::style_text(&rows.len().to_string(), ui::StyleType::TotalValue),
        table
    )
}
