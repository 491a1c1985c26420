//! Yahoo Finance chart API response types.

use chrono::{DateTime, NaiveDate};
use serde::Deserialize;

use crate::domain::benchmark::BenchmarkPoint;

/// Top-level chart response.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    /// Chart envelope.
    pub chart: ChartEnvelope,
}

/// Chart envelope carrying either results or an error.
#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    /// One result per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Error reported by the API.
    #[serde(default)]
    pub error: Option<ChartError>,
}

/// Error reported inside a chart envelope.
#[derive(Debug, Deserialize)]
pub struct ChartError {
    /// Error code.
    pub code: String,
    /// Error description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Chart data for a single symbol.
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Exchange metadata.
    #[serde(default)]
    pub meta: ChartMeta,
    /// Bar open times (Unix seconds). Absent when the range has no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    /// Price indicators aligned with `timestamp`.
    #[serde(default)]
    pub indicators: Indicators,
}

/// Exchange metadata.
#[derive(Debug, Default, Deserialize)]
pub struct ChartMeta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    pub gmtoffset: i64,
}

/// Indicator block.
#[derive(Debug, Default, Deserialize)]
pub struct Indicators {
    /// OHLCV quote series.
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Quote series; missing bars are null.
#[derive(Debug, Default, Deserialize)]
pub struct Quote {
    /// Close prices.
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResult {
    /// Daily closes keyed by exchange-local date.
    ///
    /// Null and non-finite closes are skipped.
    #[must_use]
    pub fn daily_closes(&self) -> Vec<BenchmarkPoint> {
        let Some(quote) = self.indicators.quote.first() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .zip(&quote.close)
            .filter_map(|(&ts, close)| {
                let date = exchange_date(ts, self.meta.gmtoffset)?;
                BenchmarkPoint::new(date, (*close)?)
            })
            .collect()
    }
}

fn exchange_date(timestamp: i64, gmtoffset: i64) -> Option<NaiveDate> {
    let local = timestamp.checked_add(gmtoffset)?;
    DateTime::from_timestamp(local, 0).map(|dt| dt.date_naive())
}
