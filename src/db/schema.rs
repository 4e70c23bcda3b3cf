//! SQL DDL for all Chronicle tables.
//!
//! Defines the `events`, `event_log`, and `schema_meta` tables. All DDL uses
//! `IF NOT EXISTS` for idempotent initialization. Field-range invariants from
//! the data model (weights and significance in [0,1], non-negative
//! engagement) are enforced with CHECK constraints so malformed events are
//! rejected at the storage boundary, never inside the scorer.

use rusqlite::Connection;

/// All schema DDL statements for Chronicle's core tables.
const SCHEMA_SQL: &str = r#"
-- Core event storage
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    type TEXT NOT NULL CHECK(type IN (
        'residence','job','education','vacation','photo','fitness',
        'finance','relationship','medical','cultural','micro','project')),
    title TEXT NOT NULL,
    date TEXT NOT NULL,
    user_weight REAL NOT NULL DEFAULT 0.0 CHECK(user_weight >= 0.0 AND user_weight <= 1.0),
    engagement INTEGER NOT NULL DEFAULT 0 CHECK(engagement >= 0),
    favorite INTEGER NOT NULL DEFAULT 0 CHECK(favorite IN (0, 1)),
    significance REAL NOT NULL DEFAULT 0.0 CHECK(significance >= 0.0 AND significance <= 1.0),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    metadata TEXT
);

CREATE INDEX IF NOT EXISTS idx_events_type ON events(type);
CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
CREATE INDEX IF NOT EXISTS idx_events_favorite ON events(favorite);
CREATE INDEX IF NOT EXISTS idx_events_significance ON events(significance);

-- Audit log
CREATE TABLE IF NOT EXISTS event_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    operation TEXT NOT NULL CHECK(operation IN ('create','update','delete','rescore','import')),
    event_id TEXT NOT NULL,
    details TEXT,
    created_at TEXT NOT NULL
);

-- Schema metadata
CREATE TABLE IF NOT EXISTS schema_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Initialize all schema tables. Idempotent (uses IF NOT EXISTS).
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)?;

    // Set initial schema version if not already present
    conn.execute(
        "INSERT OR IGNORE INTO schema_meta (key, value) VALUES ('schema_version', '1')",
        [],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"events".to_string()));
        assert!(tables.contains(&"event_log".to_string()));
        assert!(tables.contains(&"schema_meta".to_string()));
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap(); // second call should not error
    }

    #[test]
    fn check_constraints_reject_out_of_range_rows() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        // user_weight above 1.0
        let result = conn.execute(
            "INSERT INTO events (id, type, title, date, user_weight, created_at, updated_at) \
             VALUES ('x', 'photo', 't', '2020-01-01T00:00:00Z', 1.5, 'now', 'now')",
            [],
        );
        assert!(result.is_err());

        // unknown type
        let result = conn.execute(
            "INSERT INTO events (id, type, title, date, created_at, updated_at) \
             VALUES ('x', 'holiday', 't', '2020-01-01T00:00:00Z', 'now', 'now')",
            [],
        );
        assert!(result.is_err());
    }
}
