//! Performance metrics record.

use serde::{Deserialize, Serialize};

/// Headline performance metrics for an equity curve.
///
/// Every field is always a finite number. All three are `0.0` when the
/// input did not carry enough usable data, so "no data" and "flat
/// performance" look the same to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Growth from first to last equity sample, as a fraction.
    pub total_return: f64,
    /// Geometric growth rate normalized to a 365.25-day year.
    pub annualized_return: f64,
    /// Mean daily return over its standard deviation, scaled by sqrt(252).
    pub sharpe_ratio: f64,
}

impl PerformanceMetrics {
    /// The all-zero result.
    pub const ZERO: Self = Self {
        total_return: 0.0,
        annualized_return: 0.0,
        sharpe_ratio: 0.0,
    };

    /// Check whether every metric is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}
