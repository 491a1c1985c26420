//! Yahoo Finance adapter implementing BenchmarkDataPort.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;

use super::api_types::ChartResponse;
use super::config::YahooConfig;
use super::error::YahooError;
use crate::application::ports::{BenchmarkDataError, BenchmarkDataPort};
use crate::domain::benchmark::{BenchmarkIndex, BenchmarkPoint};
use crate::infrastructure::http::{
    ErrorCategory, ExponentialBackoff, RetryConfig, categorize_status,
};

const CHART_PATH: &str = "/v8/finance/chart";
const USER_AGENT: &str = concat!("portfolio-feed/", env!("CARGO_PKG_VERSION"));

/// Yahoo Finance daily index data adapter.
#[derive(Debug, Clone)]
pub struct YahooBenchmarkAdapter {
    client: Client,
    base_url: String,
    retry_config: RetryConfig,
}

impl YahooBenchmarkAdapter {
    /// Create a new Yahoo Finance adapter.
    pub fn new(config: &YahooConfig) -> Result<Self, YahooError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| YahooError::Http(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            retry_config: config.retry.clone(),
        })
    }

    fn chart_url(&self, symbol: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> String {
        format!(
            "{}{CHART_PATH}/{}?period1={}&period2={}&interval=1d&events=history",
            self.base_url,
            encode_symbol(symbol),
            start.timestamp(),
            end.timestamp()
        )
    }

    async fn fetch_chart(&self, symbol: &str, url: &str) -> Result<ChartResponse, YahooError> {
        let mut backoff = ExponentialBackoff::new(&self.retry_config);

        loop {
            let response = match self.client.get(url).send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            error = %e,
                            symbol,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt(),
                            "Network error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    tracing::error!(error = %e, symbol, "Network error, giving up");
                    return Err(YahooError::MaxRetriesExceeded {
                        attempts: backoff.attempt(),
                    });
                }
            };

            let status = response.status();
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let body = response
                .text()
                .await
                .map_err(|e| YahooError::Network(e.to_string()))?;

            if status.is_success() {
                return serde_json::from_str(&body).map_err(|e| YahooError::JsonParse(e.to_string()));
            }

            match categorize_status(status) {
                category @ (ErrorCategory::RateLimited | ErrorCategory::Retryable) => {
                    let delay = backoff.next_backoff().map(|computed| {
                        if category == ErrorCategory::RateLimited {
                            retry_after.map_or(computed, Duration::from_secs)
                        } else {
                            computed
                        }
                    });
                    if let Some(delay) = delay {
                        tracing::warn!(
                            status = status.as_u16(),
                            symbol,
                            delay_ms = delay.as_millis(),
                            "Retryable error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(YahooError::MaxRetriesExceeded {
                        attempts: backoff.attempt(),
                    });
                }
                ErrorCategory::NonRetryable => {
                    // The chart API reports unknown symbols as 404 with an error envelope.
                    let envelope = serde_json::from_str::<ChartResponse>(&body)
                        .ok()
                        .filter(|chart| chart.chart.error.is_some());
                    if let Some(chart) = envelope {
                        return Ok(chart);
                    }
                    return Err(YahooError::Status {
                        status: status.as_u16(),
                        body,
                    });
                }
            }
        }
    }

    async fn daily_closes_for(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BenchmarkPoint>, YahooError> {
        let url = self.chart_url(symbol, start, end);
        let response = self.fetch_chart(symbol, &url).await?;

        if let Some(err) = response.chart.error {
            if err.code.eq_ignore_ascii_case("not found") {
                return Err(YahooError::NoData {
                    symbol: symbol.to_string(),
                });
            }
            return Err(YahooError::Api {
                code: err.code,
                description: err.description.unwrap_or_default(),
            });
        }

        let result = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| YahooError::NoData {
                symbol: symbol.to_string(),
            })?;

        Ok(result.daily_closes())
    }
}

/// Percent-encode the characters index tickers use (`^`).
fn encode_symbol(symbol: &str) -> String {
    symbol.replace('^', "%5E")
}

#[async_trait]
impl BenchmarkDataPort for YahooBenchmarkAdapter {
    async fn daily_closes(
        &self,
        index: BenchmarkIndex,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BenchmarkPoint>, BenchmarkDataError> {
        let symbol = index.symbol();
        tracing::debug!(%index, symbol, %start, %end, "Requesting daily closes");
        self.daily_closes_for(symbol, start, end)
            .await
            .map_err(BenchmarkDataError::from)
    }
}
