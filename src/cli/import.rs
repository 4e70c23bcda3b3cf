//! CLI `import` command — bulk-load events from a JSON file.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use crate::config::ChronicleConfig;
use crate::event::import::{DedupCache, ImportOutcome, ImportRecord};
use crate::event::store;

/// Import format — matches export output.
#[derive(Debug, serde::Deserialize)]
struct ImportData {
    events: Vec<ImportRecord>,
}

/// Import events from a JSON file.
///
/// Duplicates are skipped via the bounded asset-id cache (seeded from the
/// database). One rescore cycle runs at the end so all scores are fresh.
pub fn import(config: &ChronicleConfig, file: &Path) -> Result<()> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read import file: {}", file.display()))?;

    let data: ImportData =
        serde_json::from_str(&json).context("failed to parse import JSON")?;

    let db_path = config.resolved_db_path();
    let mut conn = crate::db::open_database(&db_path)?;

    let mut cache = DedupCache::with_capacity(config.import.dedup_cache_size);
    cache.seed_from_store(&conn)?;

    println!("Importing {} events...", data.events.len());

    let pb = ProgressBar::new(data.events.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {bar:40.cyan/blue} {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("##-"),
    );

    let mut imported = 0u64;
    let mut skipped = 0u64;

    for record in &data.events {
        match crate::event::import::import_record(&mut conn, record, &mut cache)? {
            ImportOutcome::Imported(_) => imported += 1,
            ImportOutcome::Duplicate => skipped += 1,
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let rescored = store::rescore_all(&mut conn)?.rescored;

    println!("Import complete:");
    println!("  Events imported: {imported}");
    println!("  Events skipped:  {skipped} (already imported)");
    println!("  Events rescored: {rescored}");

    Ok(())
}
