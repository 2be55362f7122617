use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Ratio of `current` to `max`, clamped to `[0, 1]`.
///
/// Returns 0 when either side is absent, `max` is zero, `current` is
/// negative, or the inputs are not numbers.
pub fn normalize(current: Option<f64>, max: Option<f64>) -> f64 {
    let (current, max) = match (current, max) {
        (Some(current), Some(max)) => (current, max),
        _ => return 0.0,
    };

    if max == 0.0 || current < 0.0 || current.is_nan() || max.is_nan() {
        return 0.0;
    }

    let ratio = current / max;
    if ratio.is_nan() {
        return 0.0;
    }

    // Negative max gives a negative ratio
    ratio.clamp(0.0, 1.0)
}

/// Ratio for metrics already expressed as a 0-100 percentage.
///
/// Values above 100 are capped at a ratio of 1; they are not rejected.
pub fn normalize_percentage(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v >= 0.0 => (v / 100.0).min(1.0),
        _ => 0.0,
    }
}

/// Round to `dp` decimal places, half away from zero, using the exact
/// binary value of `value`. Non-finite input rounds to 0.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    Decimal::from_f64_retain(value)
        .or_else(|| Decimal::from_f64(value))
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_missing_inputs() {
        assert_eq!(normalize(None, Some(100.0)), 0.0);
        assert_eq!(normalize(Some(50.0), None), 0.0);
        assert_eq!(normalize(None, None), 0.0);
    }

    #[test]
    fn test_normalize_zero_max() {
        assert_eq!(normalize(Some(50.0), Some(0.0)), 0.0);
        assert_eq!(normalize(Some(0.0), Some(0.0)), 0.0);
    }

    #[test]
    fn test_normalize_negative_current() {
        assert_eq!(normalize(Some(-5.0), Some(100.0)), 0.0);
    }

    #[test]
    fn test_normalize_caps_at_one() {
        assert_eq!(normalize(Some(250.0), Some(100.0)), 1.0);
        assert_eq!(normalize(Some(100.0), Some(100.0)), 1.0);
    }

    #[test]
    fn test_normalize_regular_ratio() {
        assert_eq!(normalize(Some(1750.0), Some(3500.0)), 0.5);
        assert_eq!(normalize(Some(0.0), Some(100.0)), 0.0);
    }

    #[test]
    fn test_normalize_malformed_numbers() {
        assert_eq!(normalize(Some(f64::NAN), Some(100.0)), 0.0);
        assert_eq!(normalize(Some(10.0), Some(f64::NAN)), 0.0);
        assert_eq!(normalize(Some(10.0), Some(-100.0)), 0.0);
        assert_eq!(normalize(Some(f64::INFINITY), Some(100.0)), 1.0);
        assert_eq!(normalize(Some(10.0), Some(f64::INFINITY)), 0.0);
        assert_eq!(normalize(Some(f64::INFINITY), Some(f64::INFINITY)), 0.0);
    }

    #[test]
    fn test_normalize_percentage() {
        assert_eq!(normalize_percentage(None), 0.0);
        assert_eq!(normalize_percentage(Some(-1.0)), 0.0);
        assert_eq!(normalize_percentage(Some(87.5)), 0.875);
        assert_eq!(normalize_percentage(Some(100.0)), 1.0);
        assert_eq!(normalize_percentage(Some(150.0)), 1.0);
        assert_eq!(normalize_percentage(Some(f64::NAN)), 0.0);
    }

    #[test]
    fn test_round_dp() {
        assert_eq!(round_dp(4.199999999999999, 2), 4.2);
        assert_eq!(round_dp(3.75, 2), 3.75);
        assert_eq!(round_dp(45.4000000001, 1), 45.4);
        assert_eq!(round_dp(0.125, 2), 0.13);
        assert_eq!(round_dp(f64::NAN, 2), 0.0);
        assert_eq!(round_dp(f64::INFINITY, 1), 0.0);
    }

    #[test]
    fn test_round_dp_uses_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(round_dp(1.005, 2), 1.0);
    }
}
