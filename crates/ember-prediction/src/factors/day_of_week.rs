use chrono::Datelike;

use ember_core::event::IntakeEvent;

/// Per-day-of-week puff totals over the window (Monday = 0).
pub fn daily_puffs(events: &[IntakeEvent]) -> [u64; 7] {
    let mut buckets = [0u64; 7];
    for event in events {
        let day = event.occurred_at.weekday().num_days_from_monday() as usize;
        buckets[day] += u64::from(event.puffs);
    }
    buckets
}

/// Day-of-week factor: the current weekday's bucket normalized by the
/// maximum daily sum.
///
/// Range: 0.0 – 1.0.
pub fn calculate(daily: &[u64; 7], current_day: usize) -> f64 {
    let max = daily.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    daily[current_day] as f64 / max as f64
}
