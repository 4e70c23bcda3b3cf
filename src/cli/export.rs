//! CLI `export` command — dump all events as JSON to stdout.

use anyhow::Result;
use serde::Serialize;

use crate::config::ChronicleConfig;
use crate::event::store;
use crate::event::types::Event;

/// Export format — wraps all events.
#[derive(Debug, Serialize)]
struct ExportData {
    events: Vec<Event>,
}

/// Export all events as JSON to stdout.
pub fn export(config: &ChronicleConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let events = store::fetch_all(&conn)?;
    let data = ExportData { events };

    let json = serde_json::to_string_pretty(&data)?;
    println!("{json}");

    eprintln!("Exported {} events.", data.events.len());

    Ok(())
}
