//! # test-fixtures
//!
//! In-memory trait implementations and event builders shared by the
//! integration tests across the workspace.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, TimeZone, Utc};

use ember_core::errors::EmberResult;
use ember_core::event::{IntakeContext, IntakeEvent, Intensity};
use ember_core::models::AchievementUnlock;
use ember_core::progress::StreakState;
use ember_core::traits::{IEventStore, IProgressStore};

/// A fixed, readable reference instant for tests: 2024-05-10 12:00 UTC.
pub fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

/// Build a valid event with default intensity/context.
pub fn event(user_id: &str, puffs: u32, occurred_at: DateTime<Utc>) -> IntakeEvent {
    event_with(
        user_id,
        puffs,
        Intensity::Medium,
        IntakeContext::Habit,
        occurred_at,
    )
}

/// Build a valid event with explicit intensity and context.
pub fn event_with(
    user_id: &str,
    puffs: u32,
    intensity: Intensity,
    context: IntakeContext,
    occurred_at: DateTime<Utc>,
) -> IntakeEvent {
    IntakeEvent {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        puffs,
        intensity,
        context,
        occurred_at,
        mood: None,
        note: None,
        created_at: occurred_at,
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

/// Vec-backed event store. Clones share the same underlying events.
#[derive(Clone, Default)]
pub struct MemEventStore {
    events: Arc<Mutex<Vec<IntakeEvent>>>,
}

impl MemEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<IntakeEvent>) -> Self {
        let store = Self::new();
        *lock(&store.events) = events;
        store
    }

    pub fn push(&self, event: IntakeEvent) {
        lock(&self.events).push(event);
    }
}

impl IEventStore for MemEventStore {
    fn insert(&self, event: &IntakeEvent) -> EmberResult<()> {
        lock(&self.events).push(event.clone());
        Ok(())
    }

    fn find(
        &self,
        user_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> EmberResult<Vec<IntakeEvent>> {
        let mut matched: Vec<IntakeEvent> = lock(&self.events)
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| from.map_or(true, |f| e.occurred_at >= f))
            .filter(|e| to.map_or(true, |t| e.occurred_at < t))
            .cloned()
            .collect();
        matched.sort_by_key(|e| e.occurred_at);
        Ok(matched)
    }

    fn count(&self, user_id: &str) -> EmberResult<u64> {
        Ok(lock(&self.events)
            .iter()
            .filter(|e| e.user_id == user_id)
            .count() as u64)
    }

    fn delete(&self, user_id: &str, event_id: &str) -> EmberResult<()> {
        let mut events = lock(&self.events);
        let before = events.len();
        events.retain(|e| !(e.user_id == user_id && e.id == event_id));
        if events.len() == before {
            return Err(ember_core::EmberError::EventNotFound {
                id: event_id.to_string(),
            });
        }
        Ok(())
    }
}

/// HashMap-backed progress store. Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct MemProgressStore {
    streaks: Arc<Mutex<HashMap<String, StreakState>>>,
    unlocks: Arc<Mutex<Vec<AchievementUnlock>>>,
}

impl MemProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlock_count(&self) -> usize {
        lock(&self.unlocks).len()
    }
}

impl IProgressStore for MemProgressStore {
    fn get_streak(&self, user_id: &str) -> EmberResult<Option<StreakState>> {
        Ok(lock(&self.streaks).get(user_id).cloned())
    }

    fn upsert_streak(&self, state: &StreakState) -> EmberResult<()> {
        lock(&self.streaks).insert(state.user_id.clone(), state.clone());
        Ok(())
    }

    fn try_unlock(
        &self,
        user_id: &str,
        achievement_id: &str,
        at: DateTime<Utc>,
    ) -> EmberResult<bool> {
        let mut unlocks = lock(&self.unlocks);
        let exists = unlocks
            .iter()
            .any(|u| u.user_id == user_id && u.achievement_id == achievement_id);
        if exists {
            return Ok(false);
        }
        unlocks.push(AchievementUnlock {
            user_id: user_id.to_string(),
            achievement_id: achievement_id.to_string(),
            unlocked_at: at,
        });
        Ok(true)
    }

    fn unlocked_ids(&self, user_id: &str) -> EmberResult<Vec<String>> {
        Ok(lock(&self.unlocks)
            .iter()
            .filter(|u| u.user_id == user_id)
            .map(|u| u.achievement_id.clone())
            .collect())
    }
}
