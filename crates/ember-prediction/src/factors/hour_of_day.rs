use chrono::Timelike;

use ember_core::event::IntakeEvent;

/// Per-hour-of-day puff totals over the window (24 buckets).
pub fn hourly_puffs(events: &[IntakeEvent]) -> [u64; 24] {
    let mut buckets = [0u64; 24];
    for event in events {
        buckets[event.occurred_at.hour() as usize] += u64::from(event.puffs);
    }
    buckets
}

/// Hour-of-day factor: the current hour's bucket normalized by the
/// maximum hourly sum.
///
/// Range: 0.0 – 1.0. An empty window yields 0.0.
pub fn calculate(hourly: &[u64; 24], current_hour: usize) -> f64 {
    let max = hourly.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return 0.0;
    }
    hourly[current_hour] as f64 / max as f64
}
