//! Portfolio refresh document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::performance::PerformanceMetrics;

/// Account snapshot with derived metrics.
///
/// `positions`, `history` and `orders` are the provider's raw responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioDocument {
    /// Refresh time, ISO-8601 local.
    pub last_updated: String,
    /// Open positions.
    pub positions: Value,
    /// Portfolio history (equity curve).
    pub history: Value,
    /// Recent orders.
    pub orders: Value,
    /// Metrics computed from `history`.
    pub metrics: PerformanceMetrics,
}

impl PortfolioDocument {
    /// File name used by the persistence sink.
    pub const NAME: &'static str = "alpaca_data.json";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_camel_case_keys() {
        let document = PortfolioDocument {
            last_updated: "2024-01-01T00:00:00".to_string(),
            positions: json!([]),
            history: json!({}),
            orders: json!([]),
            metrics: PerformanceMetrics::ZERO,
        };

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(value["lastUpdated"], "2024-01-01T00:00:00");
        assert_eq!(value["metrics"]["sharpeRatio"], 0.0);
        assert!(value.get("last_updated").is_none());
    }
}
