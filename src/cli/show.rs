//! CLI `show` command — display full details for a single event.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::store;

/// Show a single event by ID and display full details.
pub fn show(config: &ChronicleConfig, id: &str) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let e = store::get_event(&conn, id)?;

    println!("Event: {}", e.id);
    println!("{}", "=".repeat(50));
    println!("  Type:          {}", e.event_type);
    println!("  Title:         {}", e.title);
    println!("  Date:          {}", e.date.to_rfc3339());
    println!("  Significance:  {:.4}", e.significance);
    println!("  User weight:   {:.2}", e.user_weight);
    println!("  Engagement:    {}", e.engagement);
    println!("  Favorite:      {}", e.favorite);
    if let Some(ref asset) = e.asset_id {
        println!("  Asset:         {asset}");
    }
    println!("  Created:       {}", e.created_at);
    println!("  Updated:       {}", e.updated_at);
    if let Some(ref meta) = e.metadata {
        println!("  Metadata:      {}", serde_json::to_string_pretty(meta)?);
    }

    Ok(())
}
