use chrono::{DateTime, Duration, Utc};

use ember_core::event::IntakeEvent;

/// Neutral factor when the prior window has no puffs.
pub const NEUTRAL: f64 = 0.5;

const RATIO_MIN: f64 = 0.5;
const RATIO_MAX: f64 = 1.5;

/// Recent-trend factor: total puffs in the most recent 3 days over the
/// prior 3-day window, clamped to [0.5, 1.5] and rescaled to [0, 1].
///
/// Range: 0.0 – 1.0. A zero-puff prior window is neutral (0.5).
pub fn calculate(events: &[IntakeEvent], now: DateTime<Utc>) -> f64 {
    let recent_start = now - Duration::days(3);
    let prior_start = now - Duration::days(6);

    let mut recent = 0u64;
    let mut prior = 0u64;
    for event in events {
        if event.occurred_at >= recent_start {
            recent += u64::from(event.puffs);
        } else if event.occurred_at >= prior_start {
            prior += u64::from(event.puffs);
        }
    }

    if prior == 0 {
        return NEUTRAL;
    }

    let ratio = (recent as f64 / prior as f64).clamp(RATIO_MIN, RATIO_MAX);
    (ratio - RATIO_MIN) / (RATIO_MAX - RATIO_MIN)
}
