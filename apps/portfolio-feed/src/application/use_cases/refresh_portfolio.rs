//! Refresh Portfolio Use Case

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde_json::{Map, Value};

use super::error::RefreshError;
use crate::application::dto::{PortfolioDocument, format_last_updated};
use crate::application::ports::{
    AccountDataError, AccountDataPort, HistoryQuery, OrderQuery, PersistencePort,
};
use crate::domain::performance::compute_history_metrics;

/// Use case for refreshing the portfolio document.
///
/// Fetches positions, one year of daily history and recent orders,
/// computes performance metrics from the history and persists the result.
/// A failed fetch degrades to an empty value so the dashboard still gets
/// a document; only persistence failures abort the cycle.
pub struct RefreshPortfolioUseCase<A, P>
where
    A: AccountDataPort,
    P: PersistencePort,
{
    account: Arc<A>,
    sink: Arc<P>,
    history_query: HistoryQuery,
    order_query: OrderQuery,
}

impl<A, P> RefreshPortfolioUseCase<A, P>
where
    A: AccountDataPort,
    P: PersistencePort,
{
    /// Create a new `RefreshPortfolioUseCase`.
    pub fn new(account: Arc<A>, sink: Arc<P>) -> Self {
        Self {
            account,
            sink,
            history_query: HistoryQuery::default(),
            order_query: OrderQuery::default(),
        }
    }

    /// Override the history query.
    #[must_use]
    pub fn with_history_query(mut self, query: HistoryQuery) -> Self {
        self.history_query = query;
        self
    }

    /// Override the order query.
    #[must_use]
    pub fn with_order_query(mut self, query: OrderQuery) -> Self {
        self.order_query = query;
        self
    }

    /// Run one refresh cycle stamped with the current local time.
    pub async fn execute(&self) -> Result<PortfolioDocument, RefreshError> {
        self.execute_at(Local::now().naive_local()).await
    }

    /// Run one refresh cycle stamped with `now`.
    pub async fn execute_at(&self, now: NaiveDateTime) -> Result<PortfolioDocument, RefreshError> {
        tracing::info!("Fetching positions");
        let positions = or_empty(
            self.account.positions().await,
            Value::Array(Vec::new()),
            "positions",
        );
        tracing::info!(count = array_len(&positions), "Retrieved positions");

        tracing::info!(
            period = %self.history_query.period,
            timeframe = %self.history_query.timeframe,
            "Fetching portfolio history"
        );
        let history = or_empty(
            self.account.portfolio_history(&self.history_query).await,
            Value::Object(Map::new()),
            "portfolio history",
        );
        let points = history.get("equity").map_or(0, array_len);
        tracing::info!(points, "Retrieved portfolio history");

        tracing::info!(status = %self.order_query.status, "Fetching orders");
        let orders = or_empty(
            self.account.orders(&self.order_query).await,
            Value::Array(Vec::new()),
            "orders",
        );
        tracing::info!(count = array_len(&orders), "Retrieved orders");

        let metrics = compute_history_metrics(&history);
        tracing::info!(
            total_return = metrics.total_return,
            annualized_return = metrics.annualized_return,
            sharpe_ratio = metrics.sharpe_ratio,
            "Computed metrics"
        );

        let document = PortfolioDocument {
            last_updated: format_last_updated(now),
            positions,
            history,
            orders,
            metrics,
        };

        let value = serde_json::to_value(&document)?;
        self.sink.save(PortfolioDocument::NAME, &value).await?;

        tracing::info!(name = PortfolioDocument::NAME, "Portfolio document saved");
        Ok(document)
    }
}

/// Unwrap a provider response, substituting `empty` on error or null.
fn or_empty(result: Result<Value, AccountDataError>, empty: Value, what: &str) -> Value {
    match result {
        Ok(Value::Null) => empty,
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, resource = what, "Fetch failed, using empty value");
            empty
        }
    }
}

fn array_len(value: &Value) -> usize {
    value.as_array().map_or(0, Vec::len)
}
