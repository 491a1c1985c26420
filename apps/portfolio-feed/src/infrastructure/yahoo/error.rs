//! Yahoo Finance adapter errors.

use thiserror::Error;

use crate::application::ports::BenchmarkDataError;

/// Errors from the Yahoo Finance adapter.
#[derive(Debug, Error, Clone)]
pub enum YahooError {
    /// HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Network error (retryable).
    #[error("Network error: {0}")]
    Network(String),

    /// Unexpected HTTP status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Chart API reported an error.
    #[error("Chart API error: {code} - {description}")]
    Api {
        /// Error code (e.g. `Not Found`).
        code: String,
        /// Error description.
        description: String,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Response carried no result for the symbol.
    #[error("No chart data for {symbol}")]
    NoData {
        /// Ticker symbol.
        symbol: String,
    },

    /// Max retries exceeded.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

impl From<YahooError> for BenchmarkDataError {
    fn from(err: YahooError) -> Self {
        match err {
            YahooError::Http(message) | YahooError::Network(message) => {
                Self::ConnectionError { message }
            }
            YahooError::MaxRetriesExceeded { attempts } => Self::ConnectionError {
                message: format!("Max retries exceeded after {attempts} attempts"),
            },
            YahooError::NoData { symbol } => Self::NoData { symbol },
            other @ (YahooError::Status { .. }
            | YahooError::Api { .. }
            | YahooError::JsonParse(_)) => Self::Unknown {
                message: other.to_string(),
            },
        }
    }
}
