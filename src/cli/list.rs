//! CLI `list` command — print the timeline.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::store;
use crate::event::types::EventType;

/// Print events ordered by date, with optional type filter, favorites-only
/// toggle, and row limit.
pub fn list(
    config: &ChronicleConfig,
    event_type: Option<EventType>,
    favorites_only: bool,
    limit: Option<usize>,
) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let events = store::fetch_all(&conn)?;
    let rows: Vec<_> = events
        .iter()
        .filter(|e| event_type.map_or(true, |t| e.event_type == t))
        .filter(|e| !favorites_only || e.favorite)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if rows.is_empty() {
        println!("No events.");
        return Ok(());
    }

    println!(
        "{:<36}  {:<10}  {:<12}  {:>6}  {:>4}  TITLE",
        "ID", "DATE", "TYPE", "SCORE", "FAV"
    );
    for e in rows {
        println!(
            "{:<36}  {:<10}  {:<12}  {:>6.4}  {:>4}  {}",
            e.id,
            e.date.format("%Y-%m-%d"),
            e.event_type,
            e.significance,
            if e.favorite { "*" } else { "" },
            e.title,
        );
    }

    Ok(())
}
