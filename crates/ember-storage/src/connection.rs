//! The single serialized write connection and its PRAGMA configuration.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use ember_core::errors::{EmberError, EmberResult, StorageError};

use crate::to_storage_err;

/// Apply safety and performance pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> EmberResult<()> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Mutex-serialized SQLite connection.
///
/// Every statement in the workspace runs through this one connection, so
/// per-user streak read-modify-write cycles never interleave at the
/// statement level.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open a file-backed connection.
    pub fn open(path: &Path) -> EmberResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory connection (for testing).
    pub fn open_in_memory() -> EmberResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        // WAL is meaningless in memory; keep the rest of the pragmas.
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| to_storage_err(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run a closure against the connection under the lock.
    pub fn with_conn<F, T>(&self, f: F) -> EmberResult<T>
    where
        F: FnOnce(&Connection) -> EmberResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|_| EmberError::Storage(StorageError::LockPoisoned))?;
        f(&guard)
    }
}
