use crate::core::{Asset, DISPLAY_PRECISION, Money, truncate_to_places};
use crate::engine::ValuationEngine;
use crate::ui;
use anyhow::Result;
use comfy_table::Cell;
use futures::future::join_all;
use indicatif::ProgressBar;
use rust_decimal::Decimal;
use tracing::debug;

/// One enriched weighting as shown to the user, already cut to the
/// conservative display precision.
#[derive(Debug, Clone)]
pub struct WeightingReportLine {
    pub currency_name: String,
    pub currency_amount: Decimal,
    pub percentage: Decimal,
    pub percentage_amount: Decimal,
}

#[derive(Debug)]
pub struct AssetValuationReport {
    pub ticker_symbol: String,
    pub title: String,
    pub value: Option<Money>,
    pub weightings: Vec<WeightingReportLine>,
    pub error: Option<String>,
}

impl AssetValuationReport {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Currency"),
            ui::header_cell("Rate (VEN)"),
            ui::header_cell("Weight (%)"),
            ui::header_cell("Contribution (VEN)"),
        ]);

        for line in &self.weightings {
            table.add_row(vec![
                Cell::new(&line.currency_name),
                ui::amount_cell(line.currency_amount),
                ui::amount_cell(line.percentage),
                ui::amount_cell(line.percentage_amount),
            ]);
        }

        // Asset name at top
        let mut output = format!(
            "Asset: {} ({})\n\n",
            ui::style_text(&self.title, ui::StyleType::Title),
            self.ticker_symbol
        );

        // Table in the middle
        output.push_str(&table.to_string());

        // Value (or the failure) at bottom
        match (&self.value, &self.error) {
            (Some(value), _) => {
                let displayed = truncate_to_places(value.amount(), DISPLAY_PRECISION);
                output.push_str(&format!(
                    "\n\nValue of one {}: {} {}",
                    ui::style_text(&self.ticker_symbol, ui::StyleType::TotalLabel),
                    ui::style_text(&displayed.to_string(), ui::StyleType::TotalValue),
                    value.currency()
                ));
            }
            (None, Some(error)) => {
                output.push_str(&format!(
                    "\n\n{}",
                    ui::style_text(error, ui::StyleType::Error)
                ));
            }
            (None, None) => {}
        }

        output
    }
}

pub async fn generate_asset_report(
    asset: &Asset,
    engine: &ValuationEngine,
    pb: ProgressBar,
) -> AssetValuationReport {
    let mut enriched = asset.clone();

    let result = match engine.enrich_asset(&mut enriched).await {
        Ok(()) => engine.asset_amount_for_one_ven(&enriched).await,
        Err(e) => Err(e),
    };

    let weightings = enriched
        .weightings()
        .iter()
        .map(|weighting| WeightingReportLine {
            currency_name: weighting.currency_name().to_string(),
            currency_amount: weighting.currency_amount(false),
            percentage: weighting.percentage(false),
            percentage_amount: weighting.percentage_amount(false),
        })
        .collect();

    let report = match result {
        Ok(value) => {
            debug!(ticker = asset.ticker_symbol(), value = %value, "Valued asset");
            AssetValuationReport {
                ticker_symbol: asset.ticker_symbol().to_string(),
                title: asset.title().to_string(),
                value: Some(value),
                weightings,
                error: None,
            }
        }
        Err(e) => {
            debug!(ticker = asset.ticker_symbol(), "Valuation failed: {e}");
            AssetValuationReport {
                ticker_symbol: asset.ticker_symbol().to_string(),
                title: asset.title().to_string(),
                value: None,
                weightings,
                error: Some(e.to_string()),
            }
        }
    };

    pb.inc(1);
    report
}

pub async fn generate_and_display_valuations(
    assets: &[Asset],
    engine: &ValuationEngine,
) -> Result<()> {
    let pb = ui::new_progress_bar(assets.len() as u64, true);
    pb.set_message("Valuing assets...");

    let report_futures = assets.iter().map(|asset| {
        let pb_clone = pb.clone();
        async move { generate_asset_report(asset, engine, pb_clone).await }
    });

    let reports = join_all(report_futures).await;
    pb.finish_and_clear();

    let num_reports = reports.len();
    for (i, report) in reports.into_iter().enumerate() {
        println!("{}", report.display_as_table());
        if i < num_reports - 1 {
            ui::print_separator();
        }
    }

    Ok(())
}
