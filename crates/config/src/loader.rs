// crates/config/src/loader.rs

use crate::RingstoreConfig;
use ringstore_core::{RingstoreError, RingstoreResult};
use std::fmt::Display;
use std::path::Path;
use tracing::info;

pub const CAPACITY_ENV: &str = "RINGSTORE_CAPACITY";
pub const LOG_LEVEL_ENV: &str = "RINGSTORE_LOG_LEVEL";

pub struct ConfigLoader;

fn file_error(action: &str, path: &Path, err: impl Display) -> RingstoreError {
    RingstoreError::Config(format!("cannot {} {}: {}", action, path.display(), err))
}

impl ConfigLoader {
    pub fn load_from_file(path: &Path) -> RingstoreResult<RingstoreConfig> {
        let content = std::fs::read_to_string(path).map_err(|e| file_error("read", path, e))?;
        toml::from_str(&content).map_err(|e| file_error("parse", path, e))
    }

    pub fn save_to_file(path: &Path, config: &RingstoreConfig) -> RingstoreResult<()> {
        let content = toml::to_string_pretty(config).map_err(|e| file_error("encode config for", path, e))?;
        std::fs::write(path, content).map_err(|e| file_error("write", path, e))
    }

    pub fn apply_env_overrides(config: RingstoreConfig) -> RingstoreResult<RingstoreConfig> {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by the `RINGSTORE_*` variable names.
    pub fn apply_overrides<F>(mut config: RingstoreConfig, lookup: F) -> RingstoreResult<RingstoreConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(capacity) = lookup(CAPACITY_ENV) {
            config.buffer.capacity = capacity.trim().parse().map_err(|_| {
                RingstoreError::Config(format!("Invalid {}: {:?}", CAPACITY_ENV, capacity))
            })?;
            info!("Buffer capacity overridden to {}", config.buffer.capacity);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.app.log_level = level.trim().to_string();
        }

        Ok(config)
    }
}
