pub mod config;
pub mod core;
pub mod engine;
pub mod factory;
pub mod log;
pub mod providers;
pub mod rebuild;
pub mod report;
pub mod ui;

use crate::core::Asset;
use crate::engine::ValuationEngine;
use crate::factory::AssetFactory;
use crate::providers::{HistoricalAssetAwareRatesProvider, StoredRatesProvider};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub enum AppCommand {
    /// Enrich and value every configured asset in Ven.
    Value,
    /// Rebuild today's historical rate rows, one asset at a time.
    Rebuild,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Ven asset valuation starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let assets = build_assets(&config);
    let provider = Arc::new(StoredRatesProvider::new(&config.rates));
    let engine = Arc::new(ValuationEngine::new(provider));

    match command {
        AppCommand::Value => report::generate_and_display_valuations(&assets, &engine).await,
        AppCommand::Rebuild => run_rebuild(assets, engine).await,
    }
}

/// A record that does not map onto a valid asset is skipped; it must not
/// take the rest of the batch down with it.
fn build_assets(config: &config::AppConfig) -> Vec<Asset> {
    config
        .assets
        .iter()
        .filter_map(|record| match AssetFactory::from_record(record) {
            Ok(asset) => Some(asset),
            Err(e) => {
                warn!(id = record.id, "Skipping malformed asset record: {e}");
                None
            }
        })
        .collect()
}

async fn run_rebuild(assets: Vec<Asset>, engine: Arc<ValuationEngine>) -> Result<()> {
    let today = chrono::Utc::now().date_naive();

    // The historical provider values one asset per query; enrich each
    // approved asset first so the peg and combo amounts are in place. The
    // engine caches the rate table across the whole batch.
    let mut targets = Vec::new();
    for mut asset in assets {
        if !asset.is_approved() {
            debug!(ticker = asset.ticker_symbol(), "Skipping unapproved asset");
            continue;
        }
        if let Err(e) = engine.enrich_asset(&mut asset).await {
            warn!(
                ticker = asset.ticker_symbol(),
                "Skipping asset during rebuild: {e}"
            );
            continue;
        }
        targets.push((today, asset));
    }

    let provider = HistoricalAssetAwareRatesProvider::new(Arc::clone(&engine));
    let rows = rebuild::rebuild_rate_rows(targets, &provider).await;
    println!("{}", rebuild::display_rows_as_table(&rows));

    Ok(())
}
