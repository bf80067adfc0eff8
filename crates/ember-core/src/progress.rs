//! Per-user gamification state: streaks, XP, level, savings baseline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_COST_PER_PACK, DEFAULT_PUFFS_PER_PACK, XP_LEVEL_BASE};

/// Long-lived, mutable per-user record.
///
/// Invariants: `longest_streak >= current_streak`; `total_xp` never
/// decreases; `level` is always `level_for_xp(total_xp)`; the baseline
/// pair is set and cleared together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakState {
    pub user_id: String,
    pub current_streak: u32,
    pub longest_streak: u32,
    /// Date-only, no time component. `None` until the first update.
    pub last_active_date: Option<NaiveDate>,
    pub total_xp: u64,
    /// Derived from `total_xp`, never independently settable.
    pub level: u32,
    pub total_logs_count: u64,
    pub total_money_saved: f64,
    pub baseline_daily_average: Option<f64>,
    pub baseline_set_date: Option<NaiveDate>,
    pub cost_per_pack: f64,
    pub puffs_per_pack: u32,
}

impl StreakState {
    /// Fresh state for a user who has never logged.
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            total_xp: 0,
            level: level_for_xp(0),
            total_logs_count: 0,
            total_money_saved: 0.0,
            baseline_daily_average: None,
            baseline_set_date: None,
            cost_per_pack: DEFAULT_COST_PER_PACK,
            puffs_per_pack: DEFAULT_PUFFS_PER_PACK,
        }
    }

    /// Monotonic XP accumulator. Re-derives `level` after every award.
    pub fn add_xp(&mut self, amount: u64) {
        self.total_xp += amount;
        self.level = level_for_xp(self.total_xp);
    }

    /// Total XP at which the next level is reached: `level² × 100`.
    pub fn xp_for_next_level(&self) -> u64 {
        u64::from(self.level) * u64::from(self.level) * XP_LEVEL_BASE
    }

    /// Set the savings baseline. Both fields move together.
    pub fn set_baseline(&mut self, daily_average: f64, today: NaiveDate) {
        self.baseline_daily_average = Some(daily_average);
        self.baseline_set_date = Some(today);
    }

    /// Cost of a single puff derived from pack economics.
    pub fn cost_per_puff(&self) -> f64 {
        if self.puffs_per_pack == 0 {
            return 0.0;
        }
        self.cost_per_pack / f64::from(self.puffs_per_pack)
    }
}

/// Level formula: `floor(sqrt(totalXP / 100)) + 1`.
///
/// Level 1 at 0 XP, level 2 at 100 XP, level 3 at 400 XP — quadratic growth.
/// Pure function of `total_xp`, no ordering dependence.
pub fn level_for_xp(total_xp: u64) -> u32 {
    (total_xp as f64 / XP_LEVEL_BASE as f64).sqrt().floor() as u32 + 1
}
