// crates/config/src/validator.rs

use crate::RingstoreConfig;
use ringstore_core::{RingstoreError, RingstoreResult};
use tracing::warn;

const LARGE_CAPACITY: usize = 1_000_000;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &RingstoreConfig) -> RingstoreResult<()> {
        // Validate buffer settings
        if config.buffer.capacity == 0 {
            return Err(RingstoreError::Config("Buffer capacity must be > 0".to_string()));
        }
        if config.buffer.capacity > LARGE_CAPACITY {
            warn!(
                "Buffer capacity {} preallocates a large slot array",
                config.buffer.capacity
            );
        }

        // Validate app settings
        let level = config.app.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(RingstoreError::Config(format!(
                "Log level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }
}
