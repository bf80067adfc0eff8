//! The five prediction factors, each normalized to [0, 1], and their
//! fixed combination weights.

pub mod context_entropy;
pub mod day_of_week;
pub mod hour_of_day;
pub mod recency;
pub mod recent_trend;

/// Fixed factor weights. Sum to 1.0.
pub const W_HOUR_OF_DAY: f64 = 0.40;
pub const W_DAY_OF_WEEK: f64 = 0.15;
pub const W_TIME_SINCE_LAST: f64 = 0.25;
pub const W_CONTEXT: f64 = 0.10;
pub const W_RECENT_TREND: f64 = 0.10;

/// Sigmoid steepness applied to `base − 0.5`.
pub const SIGMOID_STEEPNESS: f64 = 6.0;

/// Output probability bounds.
pub const PROBABILITY_FLOOR: f64 = 0.05;
pub const PROBABILITY_CEILING: f64 = 0.95;

/// Weighted sum of the five factor values.
pub fn weighted_sum(
    hour_of_day: f64,
    day_of_week: f64,
    time_since_last: f64,
    context_predictability: f64,
    recent_trend: f64,
) -> f64 {
    W_HOUR_OF_DAY * hour_of_day
        + W_DAY_OF_WEEK * day_of_week
        + W_TIME_SINCE_LAST * time_since_last
        + W_CONTEXT * context_predictability
        + W_RECENT_TREND * recent_trend
}

/// Squash a base score through the logistic function and clamp to the
/// probability bounds.
pub fn squash(base: f64) -> f64 {
    let p = sigmoid(SIGMOID_STEEPNESS * (base - 0.5));
    p.clamp(PROBABILITY_FLOOR, PROBABILITY_CEILING)
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
