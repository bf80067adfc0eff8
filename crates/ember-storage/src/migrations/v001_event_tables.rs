//! v001: intake_events.

use rusqlite::Connection;

use ember_core::errors::EmberResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> EmberResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS intake_events (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            puffs       INTEGER NOT NULL,
            intensity   TEXT NOT NULL,
            context     TEXT NOT NULL,
            occurred_at TEXT NOT NULL,
            mood        INTEGER,
            note        TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_user_time
            ON intake_events(user_id, occurred_at);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
