//! StorageEngine — owns the write connection, implements IEventStore +
//! IProgressStore, runs migrations on startup.

use std::path::Path;

use chrono::{DateTime, Utc};

use ember_core::errors::EmberResult;
use ember_core::event::IntakeEvent;
use ember_core::progress::StreakState;
use ember_core::traits::{IEventStore, IProgressStore};

use crate::connection::WriteConnection;
use crate::migrations;
use crate::queries::{event_ops, progress_ops};

/// The main storage engine. One per process; shared behind the trait
/// seams by every component that needs persistence.
pub struct StorageEngine {
    writer: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> EmberResult<Self> {
        let writer = WriteConnection::open(path)?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> EmberResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let engine = Self { writer };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> EmberResult<()> {
        self.writer.with_conn(migrations::run_migrations)
    }
}

impl IEventStore for StorageEngine {
    fn insert(&self, event: &IntakeEvent) -> EmberResult<()> {
        self.writer.with_conn(|conn| {
            event_ops::insert_event(conn, event)?;
            tracing::debug!(event_id = %event.id, user_id = %event.user_id, "event inserted");
            Ok(())
        })
    }

    fn find(
        &self,
        user_id: &str,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> EmberResult<Vec<IntakeEvent>> {
        self.writer
            .with_conn(|conn| event_ops::find_events(conn, user_id, from, to))
    }

    fn count(&self, user_id: &str) -> EmberResult<u64> {
        self.writer
            .with_conn(|conn| event_ops::count_events(conn, user_id))
    }

    fn delete(&self, user_id: &str, event_id: &str) -> EmberResult<()> {
        self.writer
            .with_conn(|conn| event_ops::delete_event(conn, user_id, event_id))
    }
}

impl IProgressStore for StorageEngine {
    fn get_streak(&self, user_id: &str) -> EmberResult<Option<StreakState>> {
        self.writer
            .with_conn(|conn| progress_ops::get_streak(conn, user_id))
    }

    fn upsert_streak(&self, state: &StreakState) -> EmberResult<()> {
        self.writer
            .with_conn(|conn| progress_ops::upsert_streak(conn, state))
    }

    fn try_unlock(
        &self,
        user_id: &str,
        achievement_id: &str,
        at: DateTime<Utc>,
    ) -> EmberResult<bool> {
        self.writer.with_conn(|conn| {
            let created = progress_ops::try_unlock(conn, user_id, achievement_id, at)?;
            if created {
                tracing::debug!(user_id, achievement_id, "achievement unlocked");
            }
            Ok(created)
        })
    }

    fn unlocked_ids(&self, user_id: &str) -> EmberResult<Vec<String>> {
        self.writer
            .with_conn(|conn| progress_ops::unlocked_ids(conn, user_id))
    }
}
