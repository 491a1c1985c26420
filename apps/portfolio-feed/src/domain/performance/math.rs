//! Statistical helpers for performance metric calculations.

/// Arithmetic mean of a slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Bessel-corrected sample variance (divides by `n - 1`).
pub fn sample_variance(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let avg = mean(values)?;
    let squared_sum: f64 = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    Some(squared_sum / (values.len() - 1) as f64)
}

/// Replace NaN and infinities with zero.
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0, 40.0]), Some(25.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_sample_variance() {
        // Population variance would be 125; Bessel correction gives 500/3.
        let Some(variance) = sample_variance(&[10.0, 20.0, 30.0, 40.0]) else {
            panic!("variance should succeed for four values");
        };
        assert!((variance - 500.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_variance_needs_two_values() {
        assert_eq!(sample_variance(&[1.0]), None);
    }

    #[test]
    fn test_finite_or_zero() {
        assert_eq!(finite_or_zero(1.5), 1.5);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
    }
}
