//! Alpaca adapter configuration.

use std::time::Duration;

use crate::infrastructure::http::RetryConfig;

/// Environment for Alpaca API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlpacaEnvironment {
    /// Paper trading (simulated).
    Paper,
    /// Live trading (real money).
    Live,
}

impl AlpacaEnvironment {
    /// Get the base URL for the trading API.
    #[must_use]
    pub const fn trading_base_url(&self) -> &'static str {
        match self {
            Self::Paper => "https://paper-api.alpaca.markets",
            Self::Live => "https://api.alpaca.markets",
        }
    }

    /// Infer the environment from a trading API base URL.
    #[must_use]
    pub fn from_base_url(base_url: &str) -> Self {
        if base_url == Self::Live.trading_base_url() {
            Self::Live
        } else {
            Self::Paper
        }
    }
}

impl std::fmt::Display for AlpacaEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paper => write!(f, "PAPER"),
            Self::Live => write!(f, "LIVE"),
        }
    }
}

/// Configuration for the Alpaca account data adapter.
///
/// Built once at process start and passed by reference to the adapter.
#[derive(Clone)]
pub struct AlpacaConfig {
    /// API key ID.
    pub api_key: String,
    /// API secret key.
    pub secret_key: String,
    /// Trading API base URL, without trailing slash.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy configuration.
    pub retry: RetryConfig,
}

impl AlpacaConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(api_key: String, secret_key: String, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            api_key,
            secret_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(30),
            retry: RetryConfig::default(),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Environment implied by the base URL.
    #[must_use]
    pub fn environment(&self) -> AlpacaEnvironment {
        AlpacaEnvironment::from_base_url(&self.base_url)
    }
}

impl std::fmt::Debug for AlpacaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlpacaConfig")
            .field("api_key", &"[REDACTED]")
            .field("secret_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .finish()
    }
}
