use chrono::{DateTime, Utc};

use ember_core::event::IntakeEvent;

/// Gaps of this length or longer are treated as an overnight pause, not
/// an informative inter-intake interval.
pub const OVERNIGHT_GAP_HOURS: f64 = 24.0;

/// Fallback average gap when no gap qualifies.
pub const DEFAULT_AVG_GAP_HOURS: f64 = 4.0;

/// Consecutive inter-event gaps in hours, excluding overnight pauses.
/// Assumes `events` are ordered by occurrence time.
pub fn qualifying_gaps(events: &[IntakeEvent]) -> Vec<f64> {
    events
        .windows(2)
        .map(|pair| hours_between(pair[0].occurred_at, pair[1].occurred_at))
        .filter(|&gap| gap < OVERNIGHT_GAP_HOURS)
        .collect()
}

/// Mean qualifying gap, or the 4-hour default when none qualify.
pub fn average_gap(gaps: &[f64]) -> f64 {
    if gaps.is_empty() {
        return DEFAULT_AVG_GAP_HOURS;
    }
    gaps.iter().sum::<f64>() / gaps.len() as f64
}

/// Time-since-last-intake factor: `min(1, (hoursSinceLast / avgGap)^1.5)`.
///
/// Range: 0.0 – 1.0. The longer past the usual interval, the closer to 1.
pub fn calculate(hours_since_last: f64, avg_gap: f64) -> f64 {
    if avg_gap <= 0.0 {
        return 1.0;
    }
    (hours_since_last.max(0.0) / avg_gap).powf(1.5).min(1.0)
}

pub fn hours_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_seconds() as f64 / 3600.0
}
