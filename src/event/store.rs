//! Event store — the transactional read/write path around the scorer.
//!
//! [`insert_event`] is the single entry point for new events; mutations go
//! through the field setters. [`rescore_all`] is the full read-modify-write
//! cycle: fetch every event, recompute significance, persist the scores, all
//! inside one transaction so a concurrent cycle can never interleave with a
//! stale snapshot.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::Serialize;
use thiserror::Error;

use crate::event::scoring;
use crate::event::types::{Event, EventType};

/// Errors from store operations, distinct from the anyhow-wrapped SQLite
/// failures that bubble up with context.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event not found: {0}")]
    NotFound(String),
    #[error("user weight must be in [0.0, 1.0], got {0}")]
    InvalidWeight(f64),
}

/// Fields supplied by the caller when creating an event.
///
/// Identity, timestamps, and significance are owned by the store: the id is
/// generated here and significance always starts at 0 until the next rescore.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub event_type: EventType,
    pub title: String,
    pub date: DateTime<Utc>,
    pub user_weight: f64,
    pub favorite: bool,
    pub asset_id: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl EventDraft {
    pub fn new(event_type: EventType, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            event_type,
            title: title.into(),
            date,
            user_weight: 0.0,
            favorite: false,
            asset_id: None,
            metadata: None,
        }
    }
}

/// Result returned from a rescore cycle.
#[derive(Debug, Serialize)]
pub struct RescoreResult {
    /// Number of events whose significance was recomputed and persisted.
    pub rescored: usize,
}

/// Insert a new event. Runs inside a transaction: validate, insert with a
/// fresh UUID v7 and significance 0, write an audit log entry.
pub fn insert_event(conn: &mut Connection, draft: &EventDraft) -> Result<Event> {
    validate_weight(draft.user_weight)?;

    let tx = conn.transaction()?;

    let id = uuid::Uuid::now_v7().to_string();
    let now = Utc::now().to_rfc3339();
    let metadata_json = draft.metadata.as_ref().map(serde_json::to_string).transpose()?;

    tx.execute(
        "INSERT INTO events (id, type, title, date, user_weight, engagement, favorite, \
         significance, asset_id, created_at, updated_at, metadata) \
         VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, 0.0, ?7, ?8, ?8, ?9)",
        params![
            id,
            draft.event_type.as_str(),
            draft.title,
            draft.date.to_rfc3339(),
            draft.user_weight,
            draft.favorite,
            draft.asset_id,
            now,
            metadata_json,
        ],
    )?;

    write_audit_log(&tx, "create", &id, None)?;
    tx.commit()?;

    Ok(Event {
        id,
        event_type: draft.event_type,
        title: draft.title.clone(),
        date: draft.date,
        user_weight: draft.user_weight,
        engagement: 0,
        favorite: draft.favorite,
        significance: 0.0,
        asset_id: draft.asset_id.clone(),
        created_at: now.clone(),
        updated_at: now,
        metadata: draft.metadata.clone(),
    })
}

/// Fetch all events, ordered by date ascending with id as tie-break so any
/// two runs over the same data see the same sequence.
pub fn fetch_all(conn: &Connection) -> Result<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, type, title, date, user_weight, engagement, favorite, significance, \
         asset_id, created_at, updated_at, metadata \
         FROM events ORDER BY date, id",
    )?;

    let events = stmt
        .query_map([], row_to_event)?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read events")?;

    Ok(events)
}

/// Fetch a single event by id.
pub fn get_event(conn: &Connection, id: &str) -> Result<Event> {
    let event = conn
        .query_row(
            "SELECT id, type, title, date, user_weight, engagement, favorite, significance, \
             asset_id, created_at, updated_at, metadata \
             FROM events WHERE id = ?1",
            params![id],
            row_to_event,
        )
        .optional()?
        .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
    Ok(event)
}

/// Delete an event. Removed events take no part in future rescores.
pub fn delete_event(conn: &Connection, id: &str) -> Result<()> {
    let rows = conn.execute("DELETE FROM events WHERE id = ?1", params![id])?;
    if rows == 0 {
        return Err(StoreError::NotFound(id.to_string()).into());
    }
    write_audit_log(conn, "delete", id, None)?;
    Ok(())
}

/// Set or clear the favorite flag.
pub fn set_favorite(conn: &Connection, id: &str, favorite: bool) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    let rows = conn.execute(
        "UPDATE events SET favorite = ?1, updated_at = ?2 WHERE id = ?3",
        params![favorite, now, id],
    )?;
    if rows == 0 {
        return Err(StoreError::NotFound(id.to_string()).into());
    }
    write_audit_log(conn, "update", id, Some(&serde_json::json!({"favorite": favorite})))?;
    Ok(())
}

/// Set the user weight. Rejects values outside [0, 1] before touching the db.
pub fn set_user_weight(conn: &Connection, id: &str, weight: f64) -> Result<()> {
    validate_weight(weight)?;
    let now = Utc::now().to_rfc3339();
    let rows = conn.execute(
        "UPDATE events SET user_weight = ?1, updated_at = ?2 WHERE id = ?3",
        params![weight, now, id],
    )?;
    if rows == 0 {
        return Err(StoreError::NotFound(id.to_string()).into());
    }
    write_audit_log(conn, "update", id, Some(&serde_json::json!({"user_weight": weight})))?;
    Ok(())
}

/// Record one user interaction with an event.
pub fn record_engagement(conn: &Connection, id: &str) -> Result<u32> {
    let now = Utc::now().to_rfc3339();
    let rows = conn.execute(
        "UPDATE events SET engagement = engagement + 1, updated_at = ?1 WHERE id = ?2",
        params![now, id],
    )?;
    if rows == 0 {
        return Err(StoreError::NotFound(id.to_string()).into());
    }
    let engagement: u32 = conn.query_row(
        "SELECT engagement FROM events WHERE id = ?1",
        params![id],
        |row| row.get(0),
    )?;
    Ok(engagement)
}

/// Persist updated significance values for the given events in one
/// transaction. Only the `significance` column (and `updated_at`) is written.
pub fn save_scores(conn: &mut Connection, events: &[Event]) -> Result<()> {
    let tx = conn.transaction()?;
    write_scores(&tx, events)?;
    tx.commit()?;
    Ok(())
}

/// The full read-modify-write cycle: fetch every event, recompute
/// significance, write the scores back. Runs inside a single transaction so
/// the snapshot read and the score write cannot interleave with another
/// writer; on failure the transaction rolls back and prior persisted scores
/// stay intact.
pub fn rescore_all(conn: &mut Connection) -> Result<RescoreResult> {
    let tx = conn.transaction()?;

    let mut events = {
        let mut stmt = tx.prepare(
            "SELECT id, type, title, date, user_weight, engagement, favorite, significance, \
             asset_id, created_at, updated_at, metadata \
             FROM events ORDER BY date, id",
        )?;
        let events = stmt
            .query_map([], row_to_event)?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read events for rescore")?;
        events
    };

    if events.is_empty() {
        tx.commit()?;
        return Ok(RescoreResult { rescored: 0 });
    }

    scoring::recompute(&mut events);
    write_scores(&tx, &events)?;

    write_audit_log(
        &tx,
        "rescore",
        "batch",
        Some(&serde_json::json!({"events": events.len()})),
    )?;
    tx.commit()?;

    tracing::debug!(events = events.len(), "significance rescored");
    Ok(RescoreResult { rescored: events.len() })
}

fn write_scores(conn: &Connection, events: &[Event]) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    let mut stmt = conn.prepare(
        "UPDATE events SET significance = ?1, updated_at = ?2 WHERE id = ?3",
    )?;
    for event in events {
        stmt.execute(params![event.significance, now, event.id])?;
    }
    Ok(())
}

fn validate_weight(weight: f64) -> Result<()> {
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(StoreError::InvalidWeight(weight).into());
    }
    Ok(())
}

/// Map an `events` row to an [`Event`]. Column order matches the SELECT
/// lists above.
fn row_to_event(row: &rusqlite::Row<'_>) -> rusqlite::Result<Event> {
    let type_str: String = row.get(1)?;
    let date_str: String = row.get(3)?;
    let metadata_str: Option<String> = row.get(11)?;

    Ok(Event {
        id: row.get(0)?,
        event_type: type_str.parse().map_err(|_| rusqlite::Error::InvalidQuery)?,
        title: row.get(2)?,
        date: DateTime::parse_from_rfc3339(&date_str)
            .map_err(|_| rusqlite::Error::InvalidQuery)?
            .with_timezone(&Utc),
        user_weight: row.get(4)?,
        engagement: row.get(5)?,
        favorite: row.get(6)?,
        significance: row.get(7)?,
        asset_id: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
        metadata: metadata_str.and_then(|s| serde_json::from_str(&s).ok()),
    })
}

/// Write an entry to the event_log audit table.
pub(crate) fn write_audit_log(
    conn: &Connection,
    operation: &str,
    event_id: &str,
    details: Option<&serde_json::Value>,
) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    let details_json = details.map(|d| d.to_string());
    conn.execute(
        "INSERT INTO event_log (operation, event_id, details, created_at) VALUES (?1, ?2, ?3, ?4)",
        params![operation, event_id, details_json, now],
    )?;
    Ok(())
}
