//! AnalyticsAggregator — windowed statistics over the event store.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use ember_core::errors::{EmberResult, ValidationError};
use ember_core::event::IntakeEvent;
use ember_core::models::{DailySummary, MonthlySummary, WeeklySummary};
use ember_core::traits::IEventStore;

use crate::{buckets, trend};

/// Pure-read aggregation over a user's events. Store failures propagate
/// unchanged — they are never collapsed into "zero events".
pub struct AnalyticsAggregator<S: IEventStore> {
    store: S,
}

impl<S: IEventStore> AnalyticsAggregator<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Statistics for one calendar day (UTC).
    pub fn daily(&self, user_id: &str, date: NaiveDate) -> EmberResult<DailySummary> {
        let events = self.window(user_id, date, date + Duration::days(1))?;

        Ok(DailySummary {
            date,
            event_count: events.len() as u64,
            total_puffs: buckets::total_puffs(&events),
            hourly_puffs: buckets::hourly_puffs(&events),
            context_counts: buckets::context_counts(&events),
            intensity_puffs: buckets::intensity_puffs(&events),
            first_event: events.first().map(|e| e.occurred_at),
            last_event: events.last().map(|e| e.occurred_at),
        })
    }

    /// Statistics for the 7 days starting at `week_start` (UTC).
    pub fn weekly(&self, user_id: &str, week_start: NaiveDate) -> EmberResult<WeeklySummary> {
        let events = self.window(user_id, week_start, week_start + Duration::days(7))?;

        let mut daily_puffs = [0u64; 7];
        for event in &events {
            let day = (event.occurred_at.date_naive() - week_start).num_days();
            if (0..7).contains(&day) {
                daily_puffs[day as usize] += u64::from(event.puffs);
            }
        }

        Ok(WeeklySummary {
            week_start,
            event_count: events.len() as u64,
            total_puffs: buckets::total_puffs(&events),
            daily_puffs,
            hourly_puffs: buckets::hourly_puffs(&events),
            context_counts: buckets::context_counts(&events),
            intensity_puffs: buckets::intensity_puffs(&events),
            first_event: events.first().map(|e| e.occurred_at),
            last_event: events.last().map(|e| e.occurred_at),
            trend: trend::compute(&daily_puffs, trend::WEEKLY_STABLE_THRESHOLD),
        })
    }

    /// Statistics for one calendar month (UTC), including the
    /// day-of-week × hour heat map.
    pub fn monthly(&self, user_id: &str, year: i32, month: u32) -> EmberResult<MonthlySummary> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(ValidationError::InvalidMonth { year, month })?;
        let end = next_month_start(year, month)
            .ok_or(ValidationError::InvalidMonth { year, month })?;
        let events = self.window(user_id, start, end)?;

        // 7-day chunks from day 1; the tail chunk of a 29/30/31-day month
        // is short but still a bucket.
        let days_in_month = (end - start).num_days() as usize;
        let chunk_count = days_in_month.div_ceil(7);
        let mut weekly_puffs = vec![0u64; chunk_count];
        for event in &events {
            let day = (event.occurred_at.date_naive() - start).num_days() as usize;
            weekly_puffs[day / 7] += u64::from(event.puffs);
        }

        Ok(MonthlySummary {
            year,
            month,
            event_count: events.len() as u64,
            total_puffs: buckets::total_puffs(&events),
            heatmap: buckets::heatmap(&events),
            context_counts: buckets::context_counts(&events),
            intensity_puffs: buckets::intensity_puffs(&events),
            first_event: events.first().map(|e| e.occurred_at),
            last_event: events.last().map(|e| e.occurred_at),
            trend: trend::compute(&weekly_puffs, trend::MONTHLY_STABLE_THRESHOLD),
            weekly_puffs,
        })
    }

    /// Fetch events in the half-open date window `[start, end)`.
    fn window(
        &self,
        user_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EmberResult<Vec<IntakeEvent>> {
        let events = self
            .store
            .find(user_id, Some(day_start(start)), Some(day_start(end)))?;
        tracing::debug!(user_id, %start, %end, count = events.len(), "window fetched");
        Ok(events)
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn next_month_start(year: i32, month: u32) -> Option<NaiveDate> {
    if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
}
