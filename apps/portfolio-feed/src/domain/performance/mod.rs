//! Performance metrics derived from an account equity curve.
//!
//! Implements the three headline dashboard metrics:
//! - Total return (first to last surviving equity sample)
//! - Annualized return (geometric, 365.25-day year)
//! - Sharpe ratio (zero risk-free rate, 252 trading days)
//!
//! The calculator is a pure function. Degenerate input never produces an
//! error; it produces [`PerformanceMetrics::ZERO`] instead.

mod calculator;
mod constants;
mod math;
mod metrics;
mod series;

pub use calculator::{compute_history_metrics, compute_metrics};
pub use metrics::PerformanceMetrics;
pub use series::{EquitySample, EquitySeries};
