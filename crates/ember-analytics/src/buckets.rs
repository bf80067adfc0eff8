//! Bucket-fill helpers shared by the window aggregations.
//!
//! Every bucket exists up front and holds zero when no event lands in it —
//! missing data is zero, never absent.

use chrono::{Datelike, Timelike};

use ember_core::event::IntakeEvent;

/// Per-hour-of-day puff totals (24 buckets).
pub fn hourly_puffs(events: &[IntakeEvent]) -> [u64; 24] {
    let mut buckets = [0u64; 24];
    for event in events {
        buckets[event.occurred_at.hour() as usize] += u64::from(event.puffs);
    }
    buckets
}

/// Per-context event counts, indexed by `IntakeContext::index`.
pub fn context_counts(events: &[IntakeEvent]) -> [u64; 5] {
    let mut buckets = [0u64; 5];
    for event in events {
        buckets[event.context.index()] += 1;
    }
    buckets
}

/// Per-intensity puff totals, indexed by `Intensity::index`.
pub fn intensity_puffs(events: &[IntakeEvent]) -> [u64; 3] {
    let mut buckets = [0u64; 3];
    for event in events {
        buckets[event.intensity.index()] += u64::from(event.puffs);
    }
    buckets
}

/// Day-of-week (Monday = 0) × hour-of-day puff totals.
pub fn heatmap(events: &[IntakeEvent]) -> [[u64; 24]; 7] {
    let mut grid = [[0u64; 24]; 7];
    for event in events {
        let day = event.occurred_at.weekday().num_days_from_monday() as usize;
        let hour = event.occurred_at.hour() as usize;
        grid[day][hour] += u64::from(event.puffs);
    }
    grid
}

/// Total puffs across a slice of events.
pub fn total_puffs(events: &[IntakeEvent]) -> u64 {
    events.iter().map(|e| u64::from(e.puffs)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use ember_core::event::{IntakeContext, Intensity};

    fn event(puffs: u32, at: chrono::DateTime<Utc>) -> IntakeEvent {
        IntakeEvent {
            id: "e".into(),
            user_id: "u".into(),
            puffs,
            intensity: Intensity::Low,
            context: IntakeContext::Stress,
            occurred_at: at,
            mood: None,
            note: None,
            created_at: at,
        }
    }

    #[test]
    fn hourly_buckets_accumulate() {
        let base = Utc.with_ymd_and_hms(2024, 5, 10, 9, 0, 0).unwrap();
        let events = vec![
            event(3, base),
            event(2, base + Duration::minutes(30)),
            event(5, base + Duration::hours(2)),
        ];
        let buckets = hourly_puffs(&events);
        assert_eq!(buckets[9], 5);
        assert_eq!(buckets[11], 5);
        assert_eq!(buckets.iter().sum::<u64>(), total_puffs(&events));
    }

    #[test]
    fn empty_slice_yields_all_zero() {
        assert_eq!(hourly_puffs(&[]), [0u64; 24]);
        assert_eq!(context_counts(&[]), [0u64; 5]);
        assert_eq!(intensity_puffs(&[]), [0u64; 3]);
        assert_eq!(total_puffs(&[]), 0);
    }
}
