//! Conditional, idempotent achievement unlocking.

use chrono::{DateTime, Utc};

use ember_core::errors::EmberResult;
use ember_core::models::AchievementDef;
use ember_core::progress::StreakState;
use ember_core::traits::IProgressStore;

use crate::catalog;

/// Evaluates the catalog against a user's state and records unlocks.
///
/// The store's conditional insert is the idempotence point: a definition
/// whose condition is met on every call is still unlocked exactly once,
/// and its XP is awarded exactly once, on the call that created the row.
pub struct AchievementEngine<'a> {
    store: &'a dyn IProgressStore,
    catalog: &'static [AchievementDef],
}

impl<'a> AchievementEngine<'a> {
    pub fn new(store: &'a dyn IProgressStore) -> Self {
        Self {
            store,
            catalog: catalog::all(),
        }
    }

    /// Check every catalog entry against `state` and unlock the ones
    /// newly met. Returns the newly unlocked definitions in catalog
    /// order. XP rewards are added to `state` in memory; persisting the
    /// updated state is the caller's job.
    pub fn check_and_unlock(
        &self,
        state: &mut StreakState,
        now: DateTime<Utc>,
    ) -> EmberResult<Vec<&'static AchievementDef>> {
        let mut newly_unlocked = Vec::new();

        for def in self.catalog {
            if !def.condition.is_met(state) {
                continue;
            }
            if self.store.try_unlock(&state.user_id, def.id, now)? {
                state.add_xp(def.xp_reward);
                tracing::debug!(
                    user_id = %state.user_id,
                    achievement_id = def.id,
                    xp_reward = def.xp_reward,
                    "achievement unlocked"
                );
                newly_unlocked.push(def);
            }
        }

        Ok(newly_unlocked)
    }
}
