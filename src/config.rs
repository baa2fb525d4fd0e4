use crate::factory::AssetRecord;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

fn default_primary() -> String {
    crate::core::currency::VEN_SYMBOL.to_string()
}

/// One persisted rate table row: `amount` units of `symbol` equal one unit
/// of `primary`. Write amounts as YAML strings so the decimal survives
/// parsing exactly.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RateEntry {
    #[serde(default = "default_primary")]
    pub primary: String,
    pub symbol: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub assets: Vec<AssetRecord>,
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "hubculture", "venval")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
