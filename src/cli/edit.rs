//! CLI mutation commands — favorite, weight, touch, delete.
//!
//! Every mutation finishes with a full rescore so persisted scores are never
//! stale relative to the event fields.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::store;

/// Set or clear the favorite flag on an event.
pub fn favorite(config: &ChronicleConfig, id: &str, on: bool) -> Result<()> {
    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    store::set_favorite(&conn, id, on)?;
    store::rescore_all(&mut conn)?;

    let event = store::get_event(&conn, id)?;
    println!(
        "Event {} {} (significance now {:.4})",
        id,
        if on { "favorited" } else { "unfavorited" },
        event.significance,
    );
    Ok(())
}

/// Set the user weight on an event.
pub fn weight(config: &ChronicleConfig, id: &str, value: f64) -> Result<()> {
    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    store::set_user_weight(&conn, id, value)?;
    store::rescore_all(&mut conn)?;

    let event = store::get_event(&conn, id)?;
    println!(
        "Event {id} weight set to {value:.2} (significance now {:.4})",
        event.significance,
    );
    Ok(())
}

/// Record one interaction with an event.
pub fn touch(config: &ChronicleConfig, id: &str) -> Result<()> {
    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    let engagement = store::record_engagement(&conn, id)?;
    store::rescore_all(&mut conn)?;

    println!("Event {id} engagement now {engagement}");
    Ok(())
}

/// Delete an event and rescore the remainder.
pub fn delete(config: &ChronicleConfig, id: &str) -> Result<()> {
    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    store::delete_event(&conn, id)?;
    store::rescore_all(&mut conn)?;

    println!("Event {id} deleted.");
    Ok(())
}
