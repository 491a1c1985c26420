//! Performance metrics calculator.

use serde_json::Value;

use super::constants::{
    DAYS_PER_YEAR, MIN_RETURNS, MIN_SAMPLES, SECONDS_PER_DAY, TRADING_DAYS_PER_YEAR,
};
use super::math::{finite_or_zero, mean, sample_variance};
use super::metrics::PerformanceMetrics;
use super::series::{EquitySample, EquitySeries};

/// Compute metrics from a raw portfolio history document.
///
/// A missing or malformed document yields [`PerformanceMetrics::ZERO`].
#[must_use]
pub fn compute_history_metrics(history: &Value) -> PerformanceMetrics {
    EquitySeries::from_history(history)
        .map_or(PerformanceMetrics::ZERO, |series| compute_metrics(&series))
}

/// Compute total return, annualized return and Sharpe ratio.
///
/// Never fails. Input is sanitized in order:
/// 1. missing entries are dropped and the sequences aligned to the shorter
///    length (at least 2 samples required);
/// 2. samples with non-positive equity are discarded together with their
///    timestamps (at least 2 required);
/// 3. non-finite daily returns are discarded (at least 2 required for the
///    Sharpe ratio only).
#[must_use]
pub fn compute_metrics(series: &EquitySeries) -> PerformanceMetrics {
    let aligned = series.aligned_samples();
    if aligned.len() < MIN_SAMPLES {
        return PerformanceMetrics::ZERO;
    }

    let samples: Vec<EquitySample> = aligned.into_iter().filter(|s| s.equity > 0.0).collect();
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return PerformanceMetrics::ZERO;
    };
    if samples.len() < MIN_SAMPLES {
        return PerformanceMetrics::ZERO;
    }

    let growth = last.equity / first.equity;
    let returns = daily_returns(&samples);

    PerformanceMetrics {
        total_return: finite_or_zero(growth - 1.0),
        annualized_return: finite_or_zero(annualize(growth, first.timestamp, last.timestamp)),
        sharpe_ratio: finite_or_zero(sharpe_ratio(&returns)),
    }
}

/// Consecutive simple returns, keeping only finite values.
fn daily_returns(samples: &[EquitySample]) -> Vec<f64> {
    samples
        .windows(2)
        .map(|pair| (pair[1].equity - pair[0].equity) / pair[0].equity)
        .filter(|r| r.is_finite())
        .collect()
}

/// Geometric growth normalized to a 365.25-day year.
fn annualize(growth: f64, first_ts: i64, last_ts: i64) -> f64 {
    let elapsed_secs = (i128::from(last_ts) - i128::from(first_ts)) as f64;
    let days = elapsed_secs / SECONDS_PER_DAY;
    if days <= 0.0 {
        return 0.0;
    }

    let years = days / DAYS_PER_YEAR;
    if years <= 0.0 {
        return 0.0;
    }

    growth.powf(1.0 / years) - 1.0
}

/// Sharpe ratio with a zero risk-free rate.
fn sharpe_ratio(returns: &[f64]) -> f64 {
    if returns.len() < MIN_RETURNS {
        return 0.0;
    }

    let (Some(avg), Some(variance)) = (mean(returns), sample_variance(returns)) else {
        return 0.0;
    };

    let std_dev = if variance > 0.0 { variance.sqrt() } else { 0.0 };
    if std_dev > 0.0 {
        avg / std_dev * TRADING_DAYS_PER_YEAR.sqrt()
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const DAY: i64 = 86_400;

    fn series(equity: &[f64], timestamp: &[i64]) -> EquitySeries {
        EquitySeries::from_values(equity, timestamp)
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(compute_metrics(&EquitySeries::default()), PerformanceMetrics::ZERO);
    }

    #[test]
    fn test_single_sample() {
        let metrics = compute_metrics(&series(&[100.0], &[0]));
        assert_eq!(metrics, PerformanceMetrics::ZERO);
    }

    #[test]
    fn test_one_year_two_samples() {
        let metrics = compute_metrics(&series(&[100.0, 110.0], &[0, DAY * 365]));

        assert!((metrics.total_return - 0.10).abs() < 1e-12);
        // 365 days is slightly less than 365.25, so annualized is a hair above 10%.
        assert!(metrics.annualized_return > 0.10);
        assert!((metrics.annualized_return - 0.10).abs() < 1e-3);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_flat_equity() {
        let metrics = compute_metrics(&series(&[100.0, 100.0, 100.0], &[0, DAY, 2 * DAY]));
        assert_eq!(metrics, PerformanceMetrics::ZERO);
    }

    #[test]
    fn test_negative_equity_dropped_with_timestamp() {
        let metrics = compute_metrics(&series(&[100.0, -5.0, 120.0], &[0, DAY, 2 * DAY]));

        assert!((metrics.total_return - 0.20).abs() < 1e-12);
        // Two days compounded to a full year: enormous but finite.
        assert!(metrics.annualized_return.is_finite());
        assert!(metrics.annualized_return > 1e12);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_zero_equity_never_divides() {
        let metrics = compute_metrics(&series(
            &[0.0, 100.0, 0.0, 110.0, 121.0],
            &[0, DAY, 2 * DAY, 3 * DAY, 4 * DAY],
        ));

        // Survivors: 100 -> 110 -> 121, two identical 10% returns.
        assert!((metrics.total_return - 0.21).abs() < 1e-12);
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert!(metrics.annualized_return.is_finite());
    }

    #[test]
    fn test_all_non_positive() {
        let metrics = compute_metrics(&series(&[0.0, -1.0, -2.0], &[0, DAY, 2 * DAY]));
        assert_eq!(metrics, PerformanceMetrics::ZERO);
    }

    #[test]
    fn test_sharpe_ratio_known_values() {
        // Returns: +10%, -5%, +10%
        let equity = [100.0, 110.0, 104.5, 114.95];
        let metrics = compute_metrics(&series(&equity, &[0, DAY, 2 * DAY, 3 * DAY]));

        let returns = [0.10, -0.05, 0.10];
        let avg = returns.iter().sum::<f64>() / 3.0;
        let variance = returns.iter().map(|r| (r - avg).powi(2)).sum::<f64>() / 2.0;
        let expected = avg / variance.sqrt() * 252f64.sqrt();

        assert!((metrics.sharpe_ratio - expected).abs() < 1e-9);
        assert!(metrics.sharpe_ratio > 0.0);
    }

    #[test]
    fn test_negative_sharpe_for_losing_curve() {
        let equity = [100.0, 95.0, 92.0, 85.0];
        let metrics = compute_metrics(&series(&equity, &[0, DAY, 2 * DAY, 3 * DAY]));

        assert!(metrics.total_return < 0.0);
        assert!(metrics.annualized_return < 0.0);
        assert!(metrics.sharpe_ratio < 0.0);
    }

    #[test]
    fn test_reversed_timestamps_zero_annualized() {
        let equity = [100.0, 105.0, 103.0];
        let metrics = compute_metrics(&series(&equity, &[2 * DAY, DAY, 0]));

        assert!((metrics.total_return - 0.03).abs() < 1e-12);
        assert_eq!(metrics.annualized_return, 0.0);
        assert!(metrics.sharpe_ratio != 0.0);
    }

    #[test]
    fn test_duplicate_timestamps_zero_annualized() {
        let metrics = compute_metrics(&series(&[100.0, 101.0, 103.0], &[DAY, DAY, DAY]));
        assert_eq!(metrics.annualized_return, 0.0);
    }

    #[test]
    fn test_infinite_equity_zeroed() {
        let metrics = compute_metrics(&series(&[100.0, f64::INFINITY, 110.0], &[0, DAY, 2 * DAY]));
        // Both returns touching the infinite sample are non-finite and dropped,
        // which zeroes only the Sharpe ratio.
        assert!((metrics.total_return - 0.10).abs() < 1e-12);
        assert!(metrics.annualized_return.is_finite());
        assert!(metrics.annualized_return > 0.0);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_history_metrics_from_json() {
        let history = json!({
            "equity": [100_000.0, null, 101_000.0, 100_500.0, 102_000.0],
            "timestamp": [0, DAY, 2 * DAY, 3 * DAY, 4 * DAY],
            "base_value": 100_000.0,
        });

        // Equity null removed first: pairs (100000,0) (101000,D) (100500,2D) (102000,3D).
        let expected = compute_metrics(&series(
            &[100_000.0, 101_000.0, 100_500.0, 102_000.0],
            &[0, DAY, 2 * DAY, 3 * DAY],
        ));
        assert_eq!(compute_history_metrics(&history), expected);
        assert!((expected.total_return - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_history_metrics_malformed() {
        assert!(compute_history_metrics(&json!(null)).is_zero());
        assert!(compute_history_metrics(&json!({})).is_zero());
        assert!(compute_history_metrics(&json!({"equity": null, "timestamp": []})).is_zero());
        assert!(
            compute_history_metrics(&json!({"equity": [1, "x", 3], "timestamp": [1, 2, 3]}))
                .is_zero()
        );
    }

    #[test]
    fn test_idempotent() {
        let s = series(&[100.0, 102.0, 99.0, 105.0], &[0, DAY, 2 * DAY, 3 * DAY]);
        assert_eq!(compute_metrics(&s), compute_metrics(&s));
    }
}
