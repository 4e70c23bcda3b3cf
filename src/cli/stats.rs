//! CLI `stats` command — journal statistics.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::types::ALL_EVENT_TYPES;

/// Display journal statistics in the terminal.
pub fn stats(config: &ChronicleConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let conn = crate::db::open_database(&db_path)?;

    let response = crate::event::stats::journal_stats(&conn, Some(&db_path))?;

    println!("Journal Statistics");
    println!("{}", "=".repeat(40));
    println!("  Total events:        {}", response.total_events);
    println!("  Favorites:           {}", response.favorite_events);
    println!();

    println!("By Type:");
    for t in ALL_EVENT_TYPES {
        let count = response.by_type.get(t.as_str()).copied().unwrap_or(0);
        println!("  {:<14} {}", t.as_str(), count);
    }
    println!();

    if let Some(mean) = response.mean_significance {
        println!("Mean significance:     {mean:.4}");
    }
    if let Some(max) = response.max_significance {
        println!("Max significance:      {max:.4}");
    }
    println!("Database size:         {} bytes", response.db_size_bytes);

    if let Some(ref earliest) = response.earliest_event {
        println!("Earliest event:        {earliest}");
    }
    if let Some(ref latest) = response.latest_event {
        println!("Latest event:          {latest}");
    }

    Ok(())
}
