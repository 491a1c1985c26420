//! Alpaca account adapter implementing AccountDataPort.

use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::{AccountDataError, AccountDataPort, HistoryQuery, OrderQuery};

use super::config::{AlpacaConfig, AlpacaEnvironment};
use super::error::AlpacaError;
use super::http_client::AlpacaHttpClient;

const POSITIONS_PATH: &str = "/v2/positions";
const PORTFOLIO_HISTORY_PATH: &str = "/v2/account/portfolio/history";
const ORDERS_PATH: &str = "/v2/orders";

/// Alpaca Markets account data adapter.
#[derive(Debug, Clone)]
pub struct AlpacaAccountAdapter {
    client: AlpacaHttpClient,
    environment: AlpacaEnvironment,
}

impl AlpacaAccountAdapter {
    /// Create a new Alpaca account adapter.
    pub fn new(config: &AlpacaConfig) -> Result<Self, AlpacaError> {
        let client = AlpacaHttpClient::new(config)?;
        Ok(Self {
            client,
            environment: config.environment(),
        })
    }

    /// Trading environment the adapter talks to.
    #[must_use]
    pub const fn environment(&self) -> AlpacaEnvironment {
        self.environment
    }

    fn history_path(query: &HistoryQuery) -> String {
        format!(
            "{PORTFOLIO_HISTORY_PATH}?period={}&timeframe={}",
            query.period, query.timeframe
        )
    }

    fn orders_path(query: &OrderQuery) -> String {
        format!(
            "{ORDERS_PATH}?status={}&limit={}&nested={}",
            query.status, query.limit, query.nested
        )
    }
}

#[async_trait]
impl AccountDataPort for AlpacaAccountAdapter {
    async fn positions(&self) -> Result<Value, AccountDataError> {
        tracing::debug!(environment = %self.environment, "Requesting positions");
        self.client
            .get(POSITIONS_PATH)
            .await
            .map_err(AccountDataError::from)
    }

    async fn portfolio_history(&self, query: &HistoryQuery) -> Result<Value, AccountDataError> {
        let path = Self::history_path(query);
        tracing::debug!(environment = %self.environment, %path, "Requesting portfolio history");
        self.client.get(&path).await.map_err(AccountDataError::from)
    }

    async fn orders(&self, query: &OrderQuery) -> Result<Value, AccountDataError> {
        let path = Self::orders_path(query);
        tracing::debug!(environment = %self.environment, %path, "Requesting orders");
        self.client.get(&path).await.map_err(AccountDataError::from)
    }
}
