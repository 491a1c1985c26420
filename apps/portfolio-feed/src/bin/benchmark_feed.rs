//! Benchmark Feed Binary
//!
//! Downloads one year of daily closes for the S&P 500 and the NASDAQ
//! Composite and writes them to `<data dir>/benchmark_data.json`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin benchmark-feed
//! ```
//!
//! # Environment Variables
//!
//! - `PORTFOLIO_FEED_DATA_DIR`: output directory (default: `data`)
//! - `PORTFOLIO_FEED_HTTP_TIMEOUT_SECS`: HTTP timeout (default: 30)
//! - `PORTFOLIO_FEED_MAX_RETRIES`: attempts per request (default: 3)
//! - `RUST_LOG`: Log level (default: info)

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use portfolio_feed::application::use_cases::RefreshBenchmarksUseCase;
use portfolio_feed::infrastructure::config::{BenchmarkConfig, load_dotenv};
use portfolio_feed::infrastructure::persistence::JsonFileSink;
use portfolio_feed::infrastructure::yahoo::YahooBenchmarkAdapter;
use portfolio_feed::telemetry::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Benchmark refresh failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = BenchmarkConfig::from_env();

    tracing::info!(
        base_url = %config.yahoo.base_url,
        data_dir = %config.data_dir.display(),
        "Starting benchmark refresh"
    );

    let provider =
        YahooBenchmarkAdapter::new(&config.yahoo).context("Failed to create Yahoo client")?;
    let sink = JsonFileSink::new(config.data_dir.clone());

    let use_case = RefreshBenchmarksUseCase::new(Arc::new(provider), Arc::new(sink));
    let document = use_case
        .execute()
        .await
        .context("Failed to refresh benchmarks")?;

    tracing::info!(
        sp500_points = document.sp500_data.len(),
        nasdaq_points = document.nasdaq_data.len(),
        "Benchmark refresh complete"
    );
    Ok(())
}
