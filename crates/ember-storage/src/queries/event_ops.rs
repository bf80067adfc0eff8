//! Insert, range query, count, and delete for intake events.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use ember_core::errors::{EmberError, EmberResult};
use ember_core::event::IntakeEvent;

use crate::{corrupt_row, to_storage_err};

/// Lexicographic sentinels for open range bounds. All timestamps are
/// stored as RFC 3339 UTC, which sorts correctly as text.
const RANGE_MIN: &str = "0000";
const RANGE_MAX: &str = "9999";

pub fn insert_event(conn: &Connection, event: &IntakeEvent) -> EmberResult<()> {
    conn.execute(
        "INSERT INTO intake_events (
            id, user_id, puffs, intensity, context, occurred_at, mood, note, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            event.id,
            event.user_id,
            event.puffs,
            event.intensity.as_str(),
            event.context.as_str(),
            event.occurred_at.to_rfc3339(),
            event.mood,
            event.note,
            event.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Events for a user in the half-open window `[from, to)`, ordered by
/// occurrence time.
pub fn find_events(
    conn: &Connection,
    user_id: &str,
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
) -> EmberResult<Vec<IntakeEvent>> {
    let from = from.map_or_else(|| RANGE_MIN.to_string(), |t| t.to_rfc3339());
    let to = to.map_or_else(|| RANGE_MAX.to_string(), |t| t.to_rfc3339());

    let mut stmt = conn
        .prepare(
            "SELECT id, user_id, puffs, intensity, context, occurred_at, mood, note, created_at
             FROM intake_events
             WHERE user_id = ?1 AND occurred_at >= ?2 AND occurred_at < ?3
             ORDER BY occurred_at ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id, from, to], row_to_event)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut events = Vec::new();
    for row in rows {
        events.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(events)
}

pub fn count_events(conn: &Connection, user_id: &str) -> EmberResult<u64> {
    conn.query_row(
        "SELECT COUNT(*) FROM intake_events WHERE user_id = ?1",
        params![user_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

pub fn delete_event(conn: &Connection, user_id: &str, event_id: &str) -> EmberResult<()> {
    let deleted = conn
        .execute(
            "DELETE FROM intake_events WHERE user_id = ?1 AND id = ?2",
            params![user_id, event_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if deleted == 0 {
        return Err(EmberError::EventNotFound {
            id: event_id.to_string(),
        });
    }
    Ok(())
}

fn row_to_event(row: &Row<'_>) -> rusqlite::Result<EmberResult<IntakeEvent>> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(1)?;
    let puffs: u32 = row.get(2)?;
    let intensity: String = row.get(3)?;
    let context: String = row.get(4)?;
    let occurred_at: String = row.get(5)?;
    let mood: Option<u8> = row.get(6)?;
    let note: Option<String> = row.get(7)?;
    let created_at: String = row.get(8)?;

    Ok(decode_event(
        id, user_id, puffs, intensity, context, occurred_at, mood, note, created_at,
    ))
}

#[allow(clippy::too_many_arguments)]
fn decode_event(
    id: String,
    user_id: String,
    puffs: u32,
    intensity: String,
    context: String,
    occurred_at: String,
    mood: Option<u8>,
    note: Option<String>,
    created_at: String,
) -> EmberResult<IntakeEvent> {
    Ok(IntakeEvent {
        id,
        user_id,
        puffs,
        intensity: intensity
            .parse()
            .map_err(|_| corrupt_row("intake_events", format!("intensity: {intensity}")))?,
        context: context
            .parse()
            .map_err(|_| corrupt_row("intake_events", format!("context: {context}")))?,
        occurred_at: parse_ts("intake_events", &occurred_at)?,
        mood,
        note,
        created_at: parse_ts("intake_events", &created_at)?,
    })
}

pub(crate) fn parse_ts(table: &str, raw: &str) -> EmberResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt_row(table, format!("timestamp {raw}: {e}")))
}
