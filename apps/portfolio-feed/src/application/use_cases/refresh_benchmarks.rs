//! Refresh Benchmarks Use Case

use std::sync::Arc;

use chrono::{DateTime, Duration, Local, Utc};

use super::error::RefreshError;
use crate::application::dto::{BenchmarkDocument, format_last_updated};
use crate::application::ports::{BenchmarkDataPort, PersistencePort};
use crate::domain::benchmark::{BenchmarkIndex, BenchmarkPoint};

/// Default lookback window.
const LOOKBACK_DAYS: i64 = 365;

/// Use case for refreshing the benchmark document.
///
/// Downloads daily closes for the S&P 500 and the NASDAQ Composite over
/// the lookback window ending now. Any provider failure aborts the cycle.
pub struct RefreshBenchmarksUseCase<B, P>
where
    B: BenchmarkDataPort,
    P: PersistencePort,
{
    provider: Arc<B>,
    sink: Arc<P>,
    lookback: Duration,
}

impl<B, P> RefreshBenchmarksUseCase<B, P>
where
    B: BenchmarkDataPort,
    P: PersistencePort,
{
    /// Create a new `RefreshBenchmarksUseCase`.
    pub fn new(provider: Arc<B>, sink: Arc<P>) -> Self {
        Self {
            provider,
            sink,
            lookback: Duration::days(LOOKBACK_DAYS),
        }
    }

    /// Override the lookback window.
    #[must_use]
    pub const fn with_lookback(mut self, lookback: Duration) -> Self {
        self.lookback = lookback;
        self
    }

    /// Run one refresh cycle ending at the current time.
    pub async fn execute(&self) -> Result<BenchmarkDocument, RefreshError> {
        self.execute_at(Local::now()).await
    }

    /// Run one refresh cycle ending at `now`.
    pub async fn execute_at(&self, now: DateTime<Local>) -> Result<BenchmarkDocument, RefreshError> {
        let end = now.with_timezone(&Utc);
        let start = end - self.lookback;

        tracing::info!(%start, %end, "Downloading benchmark data");
        let mut document = BenchmarkDocument {
            last_updated: format_last_updated(now.naive_local()),
            sp500_data: Vec::new(),
            nasdaq_data: Vec::new(),
        };
        for index in BenchmarkIndex::ALL {
            *document.series_mut(index) = self.fetch(index, start, end).await?;
        }
        tracing::info!(
            sp500_points = document.sp500_data.len(),
            nasdaq_points = document.nasdaq_data.len(),
            "Benchmark data downloaded"
        );

        let value = serde_json::to_value(&document)?;
        self.sink.save(BenchmarkDocument::NAME, &value).await?;

        tracing::info!(name = BenchmarkDocument::NAME, "Benchmark document saved");
        Ok(document)
    }

    async fn fetch(
        &self,
        index: BenchmarkIndex,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<BenchmarkPoint>, RefreshError> {
        let points = self.provider.daily_closes(index, start, end).await?;
        tracing::debug!(%index, symbol = index.symbol(), points = points.len(), "Fetched index");
        Ok(points)
    }
}
