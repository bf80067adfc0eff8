//! Per-user progress orchestration: streak transitions, XP, savings.

use std::sync::Mutex;

use chrono::NaiveTime;

use ember_core::constants::XP_PER_LOG;
use ember_core::errors::EmberResult;
use ember_core::models::AchievementDef;
use ember_core::progress::StreakState;
use ember_core::traits::{Clock, IEventStore, IProgressStore};

use crate::achievements::AchievementEngine;
use crate::streak;

/// Result of one recorded log: the persisted state plus whatever the
/// log pushed over an achievement threshold.
#[derive(Debug)]
pub struct LogOutcome {
    pub state: StreakState,
    pub newly_unlocked: Vec<&'static AchievementDef>,
}

/// Drives [`StreakState`] forward from logging activity.
///
/// Every mutation is a load, transition, persist cycle guarded by
/// `update_lock`, so two same-user calls racing through one tracker
/// cannot interleave their read-modify-write.
pub struct StreakTracker<E, P, C> {
    events: E,
    progress: P,
    clock: C,
    update_lock: Mutex<()>,
}

impl<E, P, C> StreakTracker<E, P, C>
where
    E: IEventStore,
    P: IProgressStore,
    C: Clock,
{
    pub fn new(events: E, progress: P, clock: C) -> Self {
        Self {
            events,
            progress,
            clock,
            update_lock: Mutex::new(()),
        }
    }

    /// Register one successful intake log.
    ///
    /// Transitions the streak for today, counts the log, awards the
    /// fixed per-log XP, refreshes money saved, runs achievement checks,
    /// and persists the state once.
    pub fn record_log(&self, user_id: &str) -> EmberResult<LogOutcome> {
        let _guard = self.lock();
        let today = self.clock.today();

        let mut state = self.load_or_default(user_id)?;
        streak::apply(&mut state, true, today);
        state.total_logs_count += 1;
        state.add_xp(XP_PER_LOG);
        state.total_money_saved = self.money_saved(&state)?;

        let engine = AchievementEngine::new(&self.progress);
        let newly_unlocked = engine.check_and_unlock(&mut state, self.clock.now())?;

        self.progress.upsert_streak(&state)?;
        tracing::debug!(
            user_id,
            current_streak = state.current_streak,
            total_xp = state.total_xp,
            unlocked = newly_unlocked.len(),
            "log recorded"
        );
        Ok(LogOutcome {
            state,
            newly_unlocked,
        })
    }

    /// Transition the streak for today without counting a log.
    ///
    /// A day with no log breaks continuity; a same-day call after a log
    /// leaves the state untouched. Persists and returns the state.
    pub fn update(&self, user_id: &str, did_log_today: bool) -> EmberResult<StreakState> {
        let _guard = self.lock();
        let today = self.clock.today();

        let mut state = self.load_or_default(user_id)?;
        streak::apply(&mut state, did_log_today, today);
        self.progress.upsert_streak(&state)?;
        Ok(state)
    }

    /// Set the pre-cessation consumption baseline for savings tracking.
    /// Both baseline fields move together; money saved restarts from it.
    pub fn set_baseline(&self, user_id: &str, daily_average: f64) -> EmberResult<StreakState> {
        let _guard = self.lock();
        let today = self.clock.today();

        let mut state = self.load_or_default(user_id)?;
        state.set_baseline(daily_average, today);
        state.total_money_saved = self.money_saved(&state)?;
        self.progress.upsert_streak(&state)?;
        Ok(state)
    }

    fn load_or_default(&self, user_id: &str) -> EmberResult<StreakState> {
        Ok(self
            .progress
            .get_streak(user_id)?
            .unwrap_or_else(|| StreakState::new(user_id)))
    }

    /// Expected spend since the baseline minus actual logged intake,
    /// floored at zero and priced per puff. Zero until a baseline exists.
    fn money_saved(&self, state: &StreakState) -> EmberResult<f64> {
        let (Some(daily_average), Some(set_date)) =
            (state.baseline_daily_average, state.baseline_set_date)
        else {
            return Ok(0.0);
        };

        let today = self.clock.today();
        let days_elapsed = (today - set_date).num_days().max(0) as f64;
        let expected_puffs = daily_average * days_elapsed;

        let since = set_date.and_time(NaiveTime::MIN).and_utc();
        let logged_puffs: u64 = self
            .events
            .find(&state.user_id, Some(since), None)?
            .iter()
            .map(|event| u64::from(event.puffs))
            .sum();

        let avoided = (expected_puffs - logged_puffs as f64).max(0.0);
        Ok(avoided * state.cost_per_puff())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.update_lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}
