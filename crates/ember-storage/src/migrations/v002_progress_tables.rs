//! v002: streak_state, achievement_unlocks.
//!
//! The composite primary key on achievement_unlocks is the uniqueness
//! constraint that makes unlocking idempotent under concurrent requests.

use rusqlite::Connection;

use ember_core::errors::EmberResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> EmberResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS streak_state (
            user_id                 TEXT PRIMARY KEY,
            current_streak          INTEGER NOT NULL DEFAULT 0,
            longest_streak          INTEGER NOT NULL DEFAULT 0,
            last_active_date        TEXT,
            total_xp                INTEGER NOT NULL DEFAULT 0,
            level                   INTEGER NOT NULL DEFAULT 1,
            total_logs_count        INTEGER NOT NULL DEFAULT 0,
            total_money_saved       REAL NOT NULL DEFAULT 0.0,
            baseline_daily_average  REAL,
            baseline_set_date       TEXT,
            cost_per_pack           REAL NOT NULL,
            puffs_per_pack          INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS achievement_unlocks (
            user_id         TEXT NOT NULL,
            achievement_id  TEXT NOT NULL,
            unlocked_at     TEXT NOT NULL,
            PRIMARY KEY (user_id, achievement_id)
        );
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
