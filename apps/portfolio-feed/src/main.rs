//! Portfolio Feed Binary
//!
//! Runs one portfolio refresh: positions, one year of daily equity history,
//! recent orders and derived performance metrics, written to
//! `<data dir>/alpaca_data.json`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin portfolio-feed
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `APCA_API_KEY_ID`: Alpaca API key
//! - `APCA_API_SECRET_KEY`: Alpaca API secret
//!
//! ## Optional
//! - `APCA_API_BASE_URL`: trading API URL (default: <https://paper-api.alpaca.markets>)
//! - `PORTFOLIO_FEED_DATA_DIR`: output directory (default: `data`)
//! - `PORTFOLIO_FEED_HTTP_TIMEOUT_SECS`: HTTP timeout (default: 30)
//! - `PORTFOLIO_FEED_MAX_RETRIES`: attempts per request (default: 3)
//! - `RUST_LOG`: Log level (default: info)

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use portfolio_feed::application::use_cases::RefreshPortfolioUseCase;
use portfolio_feed::infrastructure::alpaca::AlpacaAccountAdapter;
use portfolio_feed::infrastructure::config::{AppConfig, load_dotenv};
use portfolio_feed::infrastructure::persistence::JsonFileSink;
use portfolio_feed::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Portfolio refresh failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    tracing::info!(
        environment = %config.alpaca.environment(),
        base_url = %config.alpaca.base_url,
        data_dir = %config.data_dir.display(),
        "Starting portfolio refresh"
    );

    let account = AlpacaAccountAdapter::new(&config.alpaca)
        .context("Failed to create Alpaca client")?;
    let sink = JsonFileSink::new(config.data_dir.clone());

    let use_case = RefreshPortfolioUseCase::new(Arc::new(account), Arc::new(sink));
    let document = use_case
        .execute()
        .await
        .context("Failed to refresh portfolio")?;

    tracing::info!(
        last_updated = %document.last_updated,
        total_return = document.metrics.total_return,
        "Portfolio refresh complete"
    );
    Ok(())
}
