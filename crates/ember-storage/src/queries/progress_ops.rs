//! Streak state upserts and conditional achievement unlocks.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use ember_core::errors::EmberResult;
use ember_core::progress::StreakState;

use crate::{corrupt_row, to_storage_err};

const DATE_FMT: &str = "%Y-%m-%d";

pub fn get_streak(conn: &Connection, user_id: &str) -> EmberResult<Option<StreakState>> {
    let row = conn
        .query_row(
            "SELECT user_id, current_streak, longest_streak, last_active_date,
                    total_xp, level, total_logs_count, total_money_saved,
                    baseline_daily_average, baseline_set_date,
                    cost_per_pack, puffs_per_pack
             FROM streak_state WHERE user_id = ?1",
            params![user_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, u32>(1)?,
                    row.get::<_, u32>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, u64>(4)?,
                    row.get::<_, u32>(5)?,
                    row.get::<_, u64>(6)?,
                    row.get::<_, f64>(7)?,
                    row.get::<_, Option<f64>>(8)?,
                    row.get::<_, Option<String>>(9)?,
                    row.get::<_, f64>(10)?,
                    row.get::<_, u32>(11)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((
        user_id,
        current_streak,
        longest_streak,
        last_active_date,
        total_xp,
        level,
        total_logs_count,
        total_money_saved,
        baseline_daily_average,
        baseline_set_date,
        cost_per_pack,
        puffs_per_pack,
    )) = row
    else {
        return Ok(None);
    };

    Ok(Some(StreakState {
        user_id,
        current_streak,
        longest_streak,
        last_active_date: parse_date(last_active_date)?,
        total_xp,
        level,
        total_logs_count,
        total_money_saved,
        baseline_daily_average,
        baseline_set_date: parse_date(baseline_set_date)?,
        cost_per_pack,
        puffs_per_pack,
    }))
}

pub fn upsert_streak(conn: &Connection, state: &StreakState) -> EmberResult<()> {
    conn.execute(
        "INSERT INTO streak_state (
            user_id, current_streak, longest_streak, last_active_date,
            total_xp, level, total_logs_count, total_money_saved,
            baseline_daily_average, baseline_set_date, cost_per_pack, puffs_per_pack
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        ON CONFLICT(user_id) DO UPDATE SET
            current_streak = excluded.current_streak,
            longest_streak = excluded.longest_streak,
            last_active_date = excluded.last_active_date,
            total_xp = excluded.total_xp,
            level = excluded.level,
            total_logs_count = excluded.total_logs_count,
            total_money_saved = excluded.total_money_saved,
            baseline_daily_average = excluded.baseline_daily_average,
            baseline_set_date = excluded.baseline_set_date,
            cost_per_pack = excluded.cost_per_pack,
            puffs_per_pack = excluded.puffs_per_pack",
        params![
            state.user_id,
            state.current_streak,
            state.longest_streak,
            state.last_active_date.map(|d| d.format(DATE_FMT).to_string()),
            state.total_xp,
            state.level,
            state.total_logs_count,
            state.total_money_saved,
            state.baseline_daily_average,
            state.baseline_set_date.map(|d| d.format(DATE_FMT).to_string()),
            state.cost_per_pack,
            state.puffs_per_pack,
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Conditional insert keyed on the composite primary key. Returns whether
/// this call created the record; a pre-existing pair is reported as
/// `false`, never as an error.
pub fn try_unlock(
    conn: &Connection,
    user_id: &str,
    achievement_id: &str,
    at: DateTime<Utc>,
) -> EmberResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO achievement_unlocks (user_id, achievement_id, unlocked_at)
             VALUES (?1, ?2, ?3)",
            params![user_id, achievement_id, at.to_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(inserted > 0)
}

pub fn unlocked_ids(conn: &Connection, user_id: &str) -> EmberResult<Vec<String>> {
    let mut stmt = conn
        .prepare(
            "SELECT achievement_id FROM achievement_unlocks
             WHERE user_id = ?1 ORDER BY unlocked_at ASC, rowid ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![user_id], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut ids = Vec::new();
    for row in rows {
        ids.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(ids)
}

fn parse_date(raw: Option<String>) -> EmberResult<Option<NaiveDate>> {
    raw.map(|s| {
        NaiveDate::parse_from_str(&s, DATE_FMT)
            .map_err(|e| corrupt_row("streak_state", format!("date {s}: {e}")))
    })
    .transpose()
}
