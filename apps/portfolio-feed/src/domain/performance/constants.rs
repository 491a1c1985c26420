//! Constants for performance metric calculations.

pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25;
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Minimum aligned (and later positive-equity) samples for any metric.
pub const MIN_SAMPLES: usize = 2;

/// Minimum finite daily returns for the Sharpe ratio.
pub const MIN_RETURNS: usize = 2;
