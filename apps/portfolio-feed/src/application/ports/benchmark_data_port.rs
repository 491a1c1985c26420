//! Benchmark Data Port (Driven Port)
//!
//! Interface for fetching daily index closes from a market data provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::benchmark::{BenchmarkIndex, BenchmarkPoint};

/// Benchmark data port error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BenchmarkDataError {
    /// Connection error.
    #[error("Benchmark data connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Provider has no data for the symbol.
    #[error("No benchmark data for {symbol}")]
    NoData {
        /// Ticker symbol.
        symbol: String,
    },

    /// Unexpected response.
    #[error("Benchmark data error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for benchmark close series.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BenchmarkDataPort: Send + Sync {
    /// Get daily closes for `index` between `start` and `end`, oldest first.
    ///
    /// Days without a close are omitted.
    async fn daily_closes(
        &self,
        index: BenchmarkIndex,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BenchmarkPoint>, BenchmarkDataError>;
}
