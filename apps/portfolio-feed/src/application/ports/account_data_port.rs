//! Account Data Port (Driven Port)
//!
//! Interface for retrieving raw account data (positions, portfolio
//! history, orders) from a brokerage.

use async_trait::async_trait;
use serde_json::Value;

/// Portfolio history query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Lookback period (e.g. `1A` for one year).
    pub period: String,
    /// Sample spacing (e.g. `1D` for daily).
    pub timeframe: String,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            period: "1A".to_string(),
            timeframe: "1D".to_string(),
        }
    }
}

/// Order listing query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    /// Order status filter (`open`, `closed` or `all`).
    pub status: String,
    /// Maximum number of orders.
    pub limit: u32,
    /// Include multi-leg children nested under their parent.
    pub nested: bool,
}

impl Default for OrderQuery {
    fn default() -> Self {
        Self {
            status: "all".to_string(),
            limit: 100,
            nested: true,
        }
    }
}

/// Account data port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountDataError {
    /// Connection error.
    #[error("Account data connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Authentication failed.
    #[error("Account data authentication failed")]
    AuthenticationFailed,

    /// Rate limited.
    #[error("Rate limited by account data provider")]
    RateLimited,

    /// Unexpected response.
    #[error("Account data error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for account data retrieval.
///
/// Responses are returned as raw JSON; they are passed through to the
/// refresh document untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountDataPort: Send + Sync {
    /// Get all open positions.
    async fn positions(&self) -> Result<Value, AccountDataError>;

    /// Get the account equity history.
    async fn portfolio_history(&self, query: &HistoryQuery) -> Result<Value, AccountDataError>;

    /// Get orders.
    async fn orders(&self, query: &OrderQuery) -> Result<Value, AccountDataError>;
}
