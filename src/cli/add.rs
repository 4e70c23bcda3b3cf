//! CLI `add` command — create a single event and rescore.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::store::{self, EventDraft};
use crate::event::types::EventType;

/// Create an event from command-line fields, then rescore the whole journal
/// so the new event (and everything around it) carries a fresh score.
pub fn add(
    config: &ChronicleConfig,
    event_type: EventType,
    title: &str,
    date: &str,
    weight: f64,
    favorite: bool,
) -> Result<()> {
    let date = super::parse_event_date(date)?;

    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    let mut draft = EventDraft::new(event_type, title, date);
    draft.user_weight = weight;
    draft.favorite = favorite;

    let event = store::insert_event(&mut conn, &draft)?;
    store::rescore_all(&mut conn)?;

    let stored = store::get_event(&conn, &event.id)?;
    println!("Added {} event {}", stored.event_type, stored.id);
    println!("  Title:        {}", stored.title);
    println!("  Date:         {}", stored.date.to_rfc3339());
    println!("  Significance: {:.4}", stored.significance);

    Ok(())
}
