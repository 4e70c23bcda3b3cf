use chronicle::db;
use chronicle::db::migrations::CURRENT_SCHEMA_VERSION;
use tempfile::TempDir;

#[test]
fn open_database_creates_file_and_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");

    let conn = db::open_database(&path).unwrap();
    assert!(path.exists());

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
fn open_database_creates_missing_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("journal.db");

    db::open_database(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn reopening_runs_migrations_idempotently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");

    {
        let conn = db::open_database(&path).unwrap();
        assert_eq!(
            db::migrations::get_schema_version(&conn).unwrap(),
            CURRENT_SCHEMA_VERSION
        );
    }

    // Second open must not error or change the version.
    let conn = db::open_database(&path).unwrap();
    assert_eq!(
        db::migrations::get_schema_version(&conn).unwrap(),
        CURRENT_SCHEMA_VERSION
    );
}

#[test]
fn wal_mode_is_enabled() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.db");

    let conn = db::open_database(&path).unwrap();
    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode.to_lowercase(), "wal");
}
