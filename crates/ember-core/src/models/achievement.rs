use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::StreakState;

/// Display grouping for achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Milestone,
    Streak,
    Logging,
    Savings,
}

/// Unlock predicate — a pure function of [`StreakState`] fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnlockCondition {
    CurrentStreakAtLeast(u32),
    TotalLogsAtLeast(u64),
    MoneySavedAtLeast(f64),
}

impl UnlockCondition {
    pub fn is_met(&self, state: &StreakState) -> bool {
        match *self {
            UnlockCondition::CurrentStreakAtLeast(n) => state.current_streak >= n,
            UnlockCondition::TotalLogsAtLeast(n) => state.total_logs_count >= n,
            UnlockCondition::MoneySavedAtLeast(n) => state.total_money_saved >= n,
        }
    }
}

/// One entry in the static achievement catalog.
///
/// Ids are immutable strings: adding entries to the catalog must never
/// invalidate previously stored unlock records.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub xp_reward: u64,
    pub category: AchievementCategory,
    pub condition: UnlockCondition,
}

/// A recorded unlock. Unique per `(user_id, achievement_id)`,
/// immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementUnlock {
    pub user_id: String,
    pub achievement_id: String,
    pub unlocked_at: DateTime<Utc>,
}
