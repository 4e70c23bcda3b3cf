//! CLI `rescore` command — user-initiated refresh of all significance scores.

use anyhow::Result;

use crate::config::ChronicleConfig;
use crate::event::store;

/// Recompute and persist significance for every event.
pub fn rescore(config: &ChronicleConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    let result = store::rescore_all(&mut conn)?;
    println!("Rescored {} events.", result.rescored);

    Ok(())
}
