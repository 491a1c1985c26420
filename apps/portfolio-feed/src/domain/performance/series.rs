//! Raw equity series as delivered by the account data provider.

use serde_json::Value;

/// One aligned (timestamp, equity) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquitySample {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Account equity at `timestamp`.
    pub equity: f64,
}

/// Untrusted equity curve: two positionally aligned sequences that may
/// contain missing entries, non-positive equity and unordered timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquitySeries {
    equity: Vec<Option<f64>>,
    timestamp: Vec<Option<i64>>,
}

impl EquitySeries {
    /// Create a series from raw equity values and epoch-second timestamps.
    #[must_use]
    pub const fn new(equity: Vec<Option<f64>>, timestamp: Vec<Option<i64>>) -> Self {
        Self { equity, timestamp }
    }

    /// Create a series with no missing entries.
    #[must_use]
    pub fn from_values(equity: &[f64], timestamp: &[i64]) -> Self {
        Self {
            equity: equity.iter().copied().map(Some).collect(),
            timestamp: timestamp.iter().copied().map(Some).collect(),
        }
    }

    /// Parse a portfolio history document (`{"equity": [...], "timestamp": [...]}`).
    ///
    /// Returns `None` when the document is not an object, either field is
    /// missing or not an array, or a non-null element is not numeric.
    /// Numeric strings and booleans are coerced; fractional timestamps are
    /// truncated toward zero.
    #[must_use]
    pub fn from_history(history: &Value) -> Option<Self> {
        let equity = history.get("equity")?.as_array()?;
        let timestamp = history.get("timestamp")?.as_array()?;

        let equity = equity
            .iter()
            .map(|v| if v.is_null() { Some(None) } else { coerce_f64(v).map(Some) })
            .collect::<Option<Vec<_>>>()?;
        let timestamp = timestamp
            .iter()
            .map(|v| if v.is_null() { Some(None) } else { coerce_i64(v).map(Some) })
            .collect::<Option<Vec<_>>>()?;

        Some(Self { equity, timestamp })
    }

    /// Raw equity values.
    #[must_use]
    pub fn equity(&self) -> &[Option<f64>] {
        &self.equity
    }

    /// Raw timestamps.
    #[must_use]
    pub fn timestamp(&self) -> &[Option<i64>] {
        &self.timestamp
    }

    /// Drop missing entries from each sequence independently, then pair the
    /// survivors positionally up to the shorter length.
    #[must_use]
    pub fn aligned_samples(&self) -> Vec<EquitySample> {
        self.equity
            .iter()
            .flatten()
            .zip(self.timestamp.iter().flatten())
            .map(|(&equity, &timestamp)| EquitySample { timestamp, equity })
            .collect()
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            (f.is_finite() && f.abs() < 9.2e18).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_history_reads_aligned_arrays() {
        let series = EquitySeries::from_history(&json!({
            "equity": [100.0, null, 110.5],
            "timestamp": [1, 2, 3],
            "profit_loss": [0, 0, 0],
        }))
        .unwrap();

        assert_eq!(series.equity(), &[Some(100.0), None, Some(110.5)]);
        assert_eq!(series.timestamp(), &[Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn from_history_rejects_missing_field() {
        assert!(EquitySeries::from_history(&json!({"equity": [1, 2]})).is_none());
        assert!(EquitySeries::from_history(&json!({"timestamp": [1, 2]})).is_none());
    }

    #[test]
    fn from_history_rejects_non_object() {
        assert!(EquitySeries::from_history(&json!(null)).is_none());
        assert!(EquitySeries::from_history(&json!([1, 2, 3])).is_none());
        assert!(EquitySeries::from_history(&json!("history")).is_none());
    }

    #[test]
    fn from_history_rejects_non_array_fields() {
        let history = json!({"equity": "100,110", "timestamp": [1, 2]});
        assert!(EquitySeries::from_history(&history).is_none());
    }

    #[test]
    fn from_history_rejects_non_numeric_element() {
        let history = json!({"equity": [100, "abc"], "timestamp": [1, 2]});
        assert!(EquitySeries::from_history(&history).is_none());

        let history = json!({"equity": [100, 110], "timestamp": [1, {"t": 2}]});
        assert!(EquitySeries::from_history(&history).is_none());
    }

    #[test]
    fn from_history_coerces_strings_and_fractional_timestamps() {
        let series = EquitySeries::from_history(&json!({
            "equity": ["100.5", 101],
            "timestamp": [" 86400 ", 172_800.9],
        }))
        .unwrap();

        assert_eq!(series.equity(), &[Some(100.5), Some(101.0)]);
        assert_eq!(series.timestamp(), &[Some(86_400), Some(172_800)]);
    }

    #[test]
    fn aligned_samples_drop_nulls_independently() {
        // Nulls are removed per sequence before pairing, so survivors shift.
        let series = EquitySeries::new(
            vec![None, Some(100.0), Some(105.0), Some(110.0)],
            vec![Some(10), Some(20), None],
        );

        let samples = series.aligned_samples();
        assert_eq!(
            samples,
            vec![
                EquitySample {
                    timestamp: 10,
                    equity: 100.0
                },
                EquitySample {
                    timestamp: 20,
                    equity: 105.0
                },
            ]
        );
    }

    #[test]
    fn aligned_samples_truncate_to_shorter() {
        let series = EquitySeries::from_values(&[1.0, 2.0, 3.0], &[1]);
        assert_eq!(series.aligned_samples().len(), 1);
    }
}
