use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::event::types::ALL_EVENT_TYPES;

/// Response from journal_stats.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_events: u64,
    pub favorite_events: u64,
    pub by_type: HashMap<String, u64>,
    pub mean_significance: Option<f64>,
    pub max_significance: Option<f64>,
    pub db_size_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earliest_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_event: Option<String>,
}

/// Compute journal statistics.
///
/// `db_path` is used for file size calculation; pass None for in-memory
/// databases.
pub fn journal_stats(conn: &Connection, db_path: Option<&Path>) -> Result<StatsResponse> {
    let (total, favorites) = count_events(conn)?;
    let by_type = count_by_type(conn)?;
    let (mean_significance, max_significance) = significance_summary(conn)?;
    let (earliest, latest) = event_date_range(conn)?;

    let db_size_bytes = db_path
        .and_then(|p| std::fs::metadata(p).ok())
        .map(|m| m.len())
        .unwrap_or(0);

    Ok(StatsResponse {
        total_events: total,
        favorite_events: favorites,
        by_type,
        mean_significance,
        max_significance,
        db_size_bytes,
        earliest_event: earliest,
        latest_event: latest,
    })
}

/// Total and favorite counts.
fn count_events(conn: &Connection) -> Result<(u64, u64)> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
    let favorites: i64 = conn.query_row(
        "SELECT COUNT(*) FROM events WHERE favorite = 1",
        [],
        |row| row.get(0),
    )?;
    Ok((total as u64, favorites as u64))
}

/// Count by event type. Every category appears, zero-count included.
fn count_by_type(conn: &Connection) -> Result<HashMap<String, u64>> {
    let mut map = HashMap::new();
    for t in ALL_EVENT_TYPES {
        map.insert(t.as_str().to_string(), 0);
    }

    let mut stmt = conn.prepare("SELECT type, COUNT(*) FROM events GROUP BY type")?;
    let rows: Vec<(String, i64)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    for (t, count) in rows {
        map.insert(t, count as u64);
    }
    Ok(map)
}

/// Mean and maximum significance across all events.
fn significance_summary(conn: &Connection) -> Result<(Option<f64>, Option<f64>)> {
    let summary: (Option<f64>, Option<f64>) = conn.query_row(
        "SELECT AVG(significance), MAX(significance) FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(summary)
}

/// Earliest and latest event dates.
fn event_date_range(conn: &Connection) -> Result<(Option<String>, Option<String>)> {
    let range: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(date), MAX(date) FROM events",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::event::store::{insert_event, rescore_all, set_favorite, EventDraft};
    use crate::event::types::EventType;
    use chrono::{TimeZone, Utc};

    fn day(n: i64) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::days(n)
    }

    #[test]
    fn empty_journal_stats() {
        let conn = db::open_memory_database().unwrap();
        let stats = journal_stats(&conn, None).unwrap();
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.favorite_events, 0);
        assert_eq!(stats.by_type["photo"], 0);
        assert!(stats.mean_significance.is_none());
        assert!(stats.earliest_event.is_none());
        assert!(stats.latest_event.is_none());
    }

    #[test]
    fn stats_count_types_and_favorites() {
        let mut conn = db::open_memory_database().unwrap();
        let a = insert_event(&mut conn, &EventDraft::new(EventType::Job, "Job", day(0))).unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Photo, "P1", day(1))).unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Photo, "P2", day(2))).unwrap();
        set_favorite(&conn, &a.id, true).unwrap();

        let stats = journal_stats(&conn, None).unwrap();
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.favorite_events, 1);
        assert_eq!(stats.by_type["photo"], 2);
        assert_eq!(stats.by_type["job"], 1);
        assert_eq!(stats.by_type["medical"], 0);
    }

    #[test]
    fn stats_track_significance_after_rescore() {
        let mut conn = db::open_memory_database().unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Residence, "Moved", day(0))).unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Micro, "Walk", day(3))).unwrap();
        rescore_all(&mut conn).unwrap();

        let stats = journal_stats(&conn, None).unwrap();
        let mean = stats.mean_significance.unwrap();
        let max = stats.max_significance.unwrap();
        assert!(mean > 0.0 && mean <= 1.0);
        assert!(max >= mean);
    }

    #[test]
    fn stats_date_range() {
        let mut conn = db::open_memory_database().unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Micro, "First", day(0))).unwrap();
        insert_event(&mut conn, &EventDraft::new(EventType::Micro, "Last", day(30))).unwrap();

        let stats = journal_stats(&conn, None).unwrap();
        assert!(stats.earliest_event.unwrap() < stats.latest_event.unwrap());
    }
}
