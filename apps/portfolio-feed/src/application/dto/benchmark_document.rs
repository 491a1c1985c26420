//! Benchmark refresh document.

use serde::{Deserialize, Serialize};

use crate::domain::benchmark::{BenchmarkIndex, BenchmarkPoint};

/// One year of daily closes for the comparison indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkDocument {
    /// Refresh time, ISO-8601 local.
    pub last_updated: String,
    /// S&P 500 closes.
    pub sp500_data: Vec<BenchmarkPoint>,
    /// NASDAQ Composite closes.
    pub nasdaq_data: Vec<BenchmarkPoint>,
}

impl BenchmarkDocument {
    /// File name used by the persistence sink.
    pub const NAME: &'static str = "benchmark_data.json";

    /// Mutable close series for `index`.
    pub const fn series_mut(&mut self, index: BenchmarkIndex) -> &mut Vec<BenchmarkPoint> {
        match index {
            BenchmarkIndex::Sp500 => &mut self.sp500_data,
            BenchmarkIndex::NasdaqComposite => &mut self.nasdaq_data,
        }
    }
}
