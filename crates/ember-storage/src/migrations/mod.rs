//! Schema migrations, versioned through `PRAGMA user_version`.

mod v001_event_tables;
mod v002_progress_tables;

use rusqlite::Connection;

use ember_core::errors::{EmberError, EmberResult, StorageError};

use crate::to_storage_err;

const CURRENT_VERSION: u32 = 2;

/// Run all pending migrations on the connection.
pub fn run_migrations(conn: &Connection) -> EmberResult<()> {
    let mut version = user_version(conn)?;

    if version < 1 {
        v001_event_tables::migrate(conn).map_err(|e| wrap(1, e))?;
        set_user_version(conn, 1)?;
        version = 1;
    }
    if version < 2 {
        v002_progress_tables::migrate(conn).map_err(|e| wrap(2, e))?;
        set_user_version(conn, 2)?;
        version = 2;
    }

    debug_assert_eq!(version, CURRENT_VERSION);
    tracing::debug!(version, "schema up to date");
    Ok(())
}

fn wrap(version: u32, e: EmberError) -> EmberError {
    EmberError::Storage(StorageError::MigrationFailed {
        version,
        reason: e.to_string(),
    })
}

fn user_version(conn: &Connection) -> EmberResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))
}

fn set_user_version(conn: &Connection, version: u32) -> EmberResult<()> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| to_storage_err(e.to_string()))
}
