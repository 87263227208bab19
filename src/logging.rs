// src/logging.rs

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry};

/// Swaps the active filter once the configured log level is known.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Applies `level` unless `RUST_LOG` already chose the filter.
    pub fn apply_level(&self, level: &str) -> Result<()> {
        if !self.from_env {
            self.handle.reload(EnvFilter::new(directives(level)))?;
        }
        Ok(())
    }
}

pub fn directives(level: &str) -> String {
    format!("ringstore={},warn", level.trim().to_ascii_lowercase())
}

/// Filter used before configuration is loaded: `RUST_LOG`, else
/// `RINGSTORE_LOG_LEVEL`, else info.
pub fn startup_filter() -> (EnvFilter, bool) {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => {
            let level = std::env::var(ringstore_config::loader::LOG_LEVEL_ENV)
                .unwrap_or_else(|_| "info".to_string());
            (EnvFilter::new(directives(&level)), false)
        }
    }
}

/// Installs the global subscriber on stderr, keeping stdout for output.
pub fn init_logging() -> Result<LogHandle> {
    let (filter, from_env) = startup_filter();
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(LogHandle { handle, from_env })
}
