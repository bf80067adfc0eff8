//! Linear trend estimation over equally spaced bucket totals.

use ember_core::models::{Trend, TrendDirection};

/// Stable band for weekly trends, in puffs per day.
pub const WEEKLY_STABLE_THRESHOLD: f64 = 0.5;

/// Stable band for monthly trends, in puffs per week. The daily threshold
/// re-derived for 7-day buckets, not copied verbatim.
pub const MONTHLY_STABLE_THRESHOLD: f64 = 3.5;

/// Ordinary least squares slope of `values` against their indices.
/// Fewer than two points have no direction; the slope is 0.
pub fn ols_slope(values: &[u64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = values.iter().map(|&v| v as f64).sum::<f64>() / n_f;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, &v) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        covariance += dx * (v as f64 - mean_y);
        variance += dx * dx;
    }

    covariance / variance
}

/// Classify a slope against a stable band.
pub fn classify(slope: f64, stable_threshold: f64) -> TrendDirection {
    if slope.abs() < stable_threshold {
        TrendDirection::Stable
    } else if slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

/// Slope plus classification in one step.
pub fn compute(values: &[u64], stable_threshold: f64) -> Trend {
    let slope = ols_slope(values);
    Trend {
        slope,
        direction: classify(slope, stable_threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_series_has_zero_slope() {
        assert_eq!(ols_slope(&[5, 5, 5, 5]), 0.0);
    }

    #[test]
    fn unit_ramp_has_unit_slope() {
        let slope = ols_slope(&[0, 1, 2, 3, 4, 5, 6]);
        assert!((slope - 1.0).abs() < 1e-12);
    }

    #[test]
    fn descending_series_is_decreasing() {
        let trend = compute(&[20, 15, 12, 8, 5, 3, 1], WEEKLY_STABLE_THRESHOLD);
        assert_eq!(trend.direction, TrendDirection::Decreasing);
        assert!(trend.slope < 0.0);
    }

    #[test]
    fn small_wobble_is_stable() {
        let trend = compute(&[10, 10, 11, 10, 9, 10, 10], WEEKLY_STABLE_THRESHOLD);
        assert_eq!(trend.direction, TrendDirection::Stable);
    }

    #[test]
    fn short_series_has_no_direction() {
        assert_eq!(ols_slope(&[]), 0.0);
        assert_eq!(ols_slope(&[7]), 0.0);
        assert_eq!(
            classify(ols_slope(&[7]), WEEKLY_STABLE_THRESHOLD),
            TrendDirection::Stable
        );
    }
}
