use chrono::{DateTime, Utc};

use crate::errors::EmberResult;
use crate::progress::StreakState;

/// Persistence for streak state and achievement unlock records.
pub trait IProgressStore: Send + Sync {
    fn get_streak(&self, user_id: &str) -> EmberResult<Option<StreakState>>;

    fn upsert_streak(&self, state: &StreakState) -> EmberResult<()>;

    /// Conditional insert of an unlock record. Returns `true` when this
    /// call created the record, `false` when the pair already existed.
    /// A duplicate attempt is a no-op, never an error — the uniqueness
    /// constraint is what keeps unlocks idempotent under races.
    fn try_unlock(
        &self,
        user_id: &str,
        achievement_id: &str,
        at: DateTime<Utc>,
    ) -> EmberResult<bool>;

    fn unlocked_ids(&self, user_id: &str) -> EmberResult<Vec<String>>;
}
