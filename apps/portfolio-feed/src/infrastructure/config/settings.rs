//! Refresh Configuration Settings
//!
//! Loaded from environment variables. Parsing goes through a lookup
//! function so it can be exercised without touching the process environment.

use std::path::PathBuf;
use std::time::Duration;

use crate::infrastructure::alpaca::{AlpacaConfig, AlpacaEnvironment};
use crate::infrastructure::http::RetryConfig;
use crate::infrastructure::yahoo::YahooConfig;

/// Alpaca API key ID.
pub const ENV_API_KEY: &str = "APCA_API_KEY_ID";
/// Alpaca API secret key.
pub const ENV_API_SECRET: &str = "APCA_API_SECRET_KEY";
/// Alpaca trading API base URL.
pub const ENV_API_BASE_URL: &str = "APCA_API_BASE_URL";
/// Output directory for the JSON documents.
pub const ENV_DATA_DIR: &str = "PORTFOLIO_FEED_DATA_DIR";
/// HTTP timeout in seconds.
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PORTFOLIO_FEED_HTTP_TIMEOUT_SECS";
/// Maximum HTTP attempts per request.
pub const ENV_MAX_RETRIES: &str = "PORTFOLIO_FEED_MAX_RETRIES";

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Required environment variable is missing.
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
}

/// Settings shared by both binaries.
#[derive(Debug, Clone)]
struct CommonSettings {
    data_dir: PathBuf,
    timeout: Duration,
    retry: RetryConfig,
}

impl CommonSettings {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(ENV_DATA_DIR)
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);

        let timeout = lookup(ENV_HTTP_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map_or(DEFAULT_HTTP_TIMEOUT, Duration::from_secs);

        let defaults = RetryConfig::default();
        let retry = RetryConfig {
            max_attempts: lookup(ENV_MAX_RETRIES)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_attempts),
            ..defaults
        };

        Self {
            data_dir,
            timeout,
            retry,
        }
    }
}

/// Configuration for the portfolio refresh.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Alpaca adapter settings, credentials included.
    pub alpaca: AlpacaConfig,
    /// Output directory.
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API credentials are missing or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = required(&lookup, ENV_API_KEY)?;
        let secret_key = required(&lookup, ENV_API_SECRET)?;

        let base_url = lookup(ENV_API_BASE_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| AlpacaEnvironment::Paper.trading_base_url().to_string());

        let common = CommonSettings::from_lookup(&lookup);

        let alpaca = AlpacaConfig::new(api_key, secret_key, base_url.trim())
            .with_timeout(common.timeout)
            .with_retry(common.retry);

        Ok(Self {
            alpaca,
            data_dir: common.data_dir,
        })
    }
}

/// Configuration for the benchmark refresh. Needs no credentials.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Yahoo adapter settings.
    pub yahoo: YahooConfig,
    /// Output directory.
    pub data_dir: PathBuf,
}

impl BenchmarkConfig {
    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let common = CommonSettings::from_lookup(&lookup);
        Self {
            yahoo: YahooConfig::default()
                .with_timeout(common.timeout)
                .with_retry(common.retry),
            data_dir: common.data_dir,
        }
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String, ConfigError> {
    let value = lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::EmptyValue(key.to_string()));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_with_credentials_only() {
        let config =
            AppConfig::from_lookup(lookup(&[(ENV_API_KEY, "PKTEST"), (ENV_API_SECRET, "shh")]))
                .unwrap();

        assert_eq!(config.alpaca.api_key, "PKTEST");
        assert_eq!(config.alpaca.base_url, "https://paper-api.alpaca.markets");
        assert_eq!(config.alpaca.environment(), AlpacaEnvironment::Paper);
        assert_eq!(config.alpaca.timeout, Duration::from_secs(30));
        assert_eq!(config.alpaca.retry, RetryConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn missing_key_is_error() {
        let result = AppConfig::from_lookup(lookup(&[(ENV_API_SECRET, "shh")]));
        assert!(matches!(result, Err(ConfigError::MissingEnvVar(k)) if k == ENV_API_KEY));
    }

    #[test]
    fn blank_secret_is_error() {
        let result =
            AppConfig::from_lookup(lookup(&[(ENV_API_KEY, "PKTEST"), (ENV_API_SECRET, "  ")]));
        assert!(matches!(result, Err(ConfigError::EmptyValue(k)) if k == ENV_API_SECRET));
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "AK"),
            (ENV_API_SECRET, "SK"),
            (ENV_API_BASE_URL, "https://api.alpaca.markets/"),
            (ENV_DATA_DIR, "/var/lib/feed"),
            (ENV_HTTP_TIMEOUT_SECS, "5"),
            (ENV_MAX_RETRIES, "7"),
        ]))
        .unwrap();

        assert_eq!(config.alpaca.environment(), AlpacaEnvironment::Live);
        assert_eq!(config.alpaca.timeout, Duration::from_secs(5));
        assert_eq!(config.alpaca.retry.max_attempts, 7);
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/feed"));
    }

    #[test]
    fn unparsable_numbers_fall_back_to_defaults() {
        let config = BenchmarkConfig::from_lookup(lookup(&[
            (ENV_HTTP_TIMEOUT_SECS, "soon"),
            (ENV_MAX_RETRIES, "0"),
        ]));
        assert_eq!(config.yahoo.timeout, DEFAULT_HTTP_TIMEOUT);
        assert_eq!(config.yahoo.retry.max_attempts, 3);
    }

    #[test]
    fn benchmark_config_ignores_credentials() {
        let config = BenchmarkConfig::from_lookup(lookup(&[(ENV_DATA_DIR, "out")]));
        assert_eq!(config.data_dir, PathBuf::from("out"));
        assert_eq!(config.yahoo.base_url, "https://query1.finance.yahoo.com");
    }
}
