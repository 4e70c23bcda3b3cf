//! CLI `reset` command — delete all events after user confirmation.

use anyhow::{bail, Result};
use std::io::Write;

use crate::config::ChronicleConfig;

/// Delete all events and audit logs after user confirmation.
pub fn reset(config: &ChronicleConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete ALL events and audit logs.");
    println!("Database: {}", db_path.display());
    print!("\nType YES to confirm: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if input.trim() != "YES" {
        bail!("reset cancelled");
    }

    let conn = crate::db::open_database(&db_path)?;

    conn.execute_batch(
        "DELETE FROM event_log;
         DELETE FROM events;",
    )?;

    println!("All events deleted. Database reset complete.");
    Ok(())
}
