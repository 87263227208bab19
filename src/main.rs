// src/main.rs

use anyhow::Result;
use ringstore::logging::init_logging;
use ringstore::{RingstoreApp, RingstoreConfig};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing::info;

const CONFIG_PATH_ENV: &str = "RINGSTORE_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let logging = init_logging()?;

    // Load configuration
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = RingstoreConfig::load(config_path.as_deref())?;
    logging.apply_level(&config.app.log_level)?;

    info!(
        "Starting ringstore v{} with capacity {}",
        env!("CARGO_PKG_VERSION"),
        config.buffer.capacity
    );

    let app = RingstoreApp::new(config);
    let stdin = BufReader::new(tokio::io::stdin());
    app.run(stdin, tokio::io::stdout()).await?;

    Ok(())
}
