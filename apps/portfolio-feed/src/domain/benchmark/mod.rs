//! Market benchmark indices and their daily close series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Market index tracked for comparison against the portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BenchmarkIndex {
    /// S&P 500.
    Sp500,
    /// NASDAQ Composite.
    NasdaqComposite,
}

impl BenchmarkIndex {
    /// All tracked indices, in document order.
    pub const ALL: [Self; 2] = [Self::Sp500, Self::NasdaqComposite];

    /// Yahoo Finance ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Sp500 => "^GSPC",
            Self::NasdaqComposite => "^IXIC",
        }
    }

    /// Human-readable index name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sp500 => "S&P 500",
            Self::NasdaqComposite => "NASDAQ Composite",
        }
    }
}

impl std::fmt::Display for BenchmarkIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Daily close of a benchmark index.
///
/// Serializes as `{"date": "YYYY-MM-DD", "value": 4783.45}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkPoint {
    /// Trading date in the exchange's local calendar.
    pub date: NaiveDate,
    /// Closing level.
    pub value: f64,
}

impl BenchmarkPoint {
    /// Create a point, rejecting non-finite closes.
    #[must_use]
    pub fn new(date: NaiveDate, value: f64) -> Option<Self> {
        value.is_finite().then_some(Self { date, value })
    }
}
