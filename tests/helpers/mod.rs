#![allow(dead_code)]

use chronicle::db;
use chronicle::event::store::{self, EventDraft};
use chronicle::event::types::{Event, EventType};
use chrono::{DateTime, TimeZone, Utc};
use rusqlite::Connection;

/// Open a fresh in-memory database with schema and migrations applied.
pub fn test_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "foreign_keys", "ON").unwrap();
    db::schema::init_schema(&conn).unwrap();
    db::migrations::run_migrations(&conn).unwrap();
    conn
}

/// A fixed epoch plus `n` days, noon UTC.
pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::days(n)
}

/// Insert a test event via the store. Returns the stored event.
pub fn insert_event(
    conn: &mut Connection,
    event_type: EventType,
    title: &str,
    date: DateTime<Utc>,
) -> Event {
    store::insert_event(conn, &EventDraft::new(event_type, title, date)).unwrap()
}
