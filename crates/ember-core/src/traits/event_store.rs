use chrono::{DateTime, Utc};

use crate::errors::EmberResult;
use crate::event::IntakeEvent;

/// Append-only, queryable-by-time-range collection of intake events.
///
/// `find` windows are half-open: `from` inclusive, `to` exclusive.
/// Results are ordered by `occurred_at` ascending. Store failures must
/// propagate as errors — never as an empty result.
pub trait IEventStore: Send + Sync {
    fn insert(&self, event: &IntakeEvent) -> EmberResult<()>;

    fn find(
        &self,
        user_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> EmberResult<Vec<IntakeEvent>>;

    fn count(&self, user_id: &str) -> EmberResult<u64>;

    /// Explicit user deletion — the only way an event leaves the store.
    fn delete(&self, user_id: &str, event_id: &str) -> EmberResult<()>;
}
