//! Runtime configuration read from the environment.

use std::path::PathBuf;

use anyhow::Context;

use stockroom_inventory::DEFAULT_INVENTORY_FILE;

pub const FILE_ENV: &str = "STOCKROOM_FILE";
pub const THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

/// Threshold the demo reports low stock against unless overridden.
pub const DEMO_LOW_STOCK_THRESHOLD: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub inventory_file: PathBuf,
    pub low_stock_threshold: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEMO_LOW_STOCK_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (unset keys fall back to defaults).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(file) = lookup(FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.inventory_file = PathBuf::from(file);
        }

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            config.low_stock_threshold = raw
                .trim()
                .parse()
                .with_context(|| format!("{THRESHOLD_ENV} must be an integer, got {raw:?}"))?;
        }

        Ok(config)
    }
}
