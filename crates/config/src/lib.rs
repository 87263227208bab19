// crates/config/src/lib.rs

use ringstore_core::RingstoreResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

pub mod loader;
pub mod validator;

pub use loader::ConfigLoader;
pub use validator::ConfigValidator;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RingstoreConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub buffer: BufferSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferSettings {
    /// Number of elements retained before the oldest is evicted.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_capacity() -> usize {
    10
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for BufferSettings {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl RingstoreConfig {
    /// Loads `path` (or defaults when absent), applies `RINGSTORE_*`
    /// environment overrides and validates the result.
    pub fn load(path: Option<&Path>) -> RingstoreResult<Self> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), with overrides read from `lookup` instead of
    /// the process environment.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> RingstoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                ConfigLoader::load_from_file(path)?
            }
            None => Self::default(),
        };

        let config = ConfigLoader::apply_overrides(config, lookup)?;
        ConfigValidator::validate(&config)?;

        Ok(config)
    }
}
