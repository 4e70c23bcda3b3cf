//! Bulk import — JSON records from an external pipeline (photo exports,
//! other journals) deduplicated by asset id.
//!
//! Deduplication state is an explicit [`DedupCache`]: a bounded, LRU-capped
//! set of asset ids passed by reference into the import routines. It is
//! seeded from ids already persisted; the unique index on `events.asset_id`
//! backs it up when an id has been evicted from the cache.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

use crate::event::store::{self, EventDraft};
use crate::event::types::EventType;

/// Bounded set of already-imported asset ids with oldest-first eviction.
#[derive(Debug)]
pub struct DedupCache {
    capacity: usize,
    seen: HashSet<String>,
    order: VecDeque<String>,
}

impl DedupCache {
    /// Create an empty cache holding at most `capacity` asset ids.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            seen: HashSet::new(),
            order: VecDeque::new(),
        }
    }

    /// Seed the cache with the most recently imported asset ids from the
    /// store, newest first, up to capacity.
    pub fn seed_from_store(&mut self, conn: &Connection) -> Result<()> {
        let mut stmt = conn.prepare(
            "SELECT asset_id FROM events WHERE asset_id IS NOT NULL \
             ORDER BY created_at DESC LIMIT ?1",
        )?;
        let ids: Vec<String> = stmt
            .query_map([self.capacity as i64], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to read asset ids")?;

        // Insert oldest first so the newest ids survive eviction longest.
        for id in ids.into_iter().rev() {
            self.insert(id);
        }
        Ok(())
    }

    pub fn contains(&self, asset_id: &str) -> bool {
        self.seen.contains(asset_id)
    }

    /// Record an asset id, evicting the oldest entry when full.
    pub fn insert(&mut self, asset_id: String) {
        if self.seen.contains(&asset_id) {
            return;
        }
        if self.seen.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.seen.insert(asset_id.clone());
        self.order.push_back(asset_id);
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// One incoming record in the import JSON. Matches the export format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRecord {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub user_weight: f64,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Outcome for a single imported record.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Inserted with the given event id.
    Imported(String),
    /// Skipped as a duplicate of an already-imported asset.
    Duplicate,
}

/// Totals for a completed import run.
#[derive(Debug, Serialize)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub rescored: usize,
}

/// Import a single record, consulting (and updating) the dedup cache.
///
/// Records without an asset id are always inserted; there is nothing to key
/// deduplication on.
pub fn import_record(
    conn: &mut Connection,
    record: &ImportRecord,
    cache: &mut DedupCache,
) -> Result<ImportOutcome> {
    if let Some(asset_id) = &record.asset_id {
        if cache.contains(asset_id) || asset_exists(conn, asset_id)? {
            cache.insert(asset_id.clone());
            return Ok(ImportOutcome::Duplicate);
        }
    }

    let mut draft = EventDraft::new(record.event_type, record.title.clone(), record.date);
    draft.user_weight = record.user_weight;
    draft.favorite = record.favorite;
    draft.asset_id = record.asset_id.clone();
    draft.metadata = record.metadata.clone();

    let event = store::insert_event(conn, &draft)?;
    store::write_audit_log(conn, "import", &event.id, None)?;

    if let Some(asset_id) = &record.asset_id {
        cache.insert(asset_id.clone());
    }
    Ok(ImportOutcome::Imported(event.id))
}

/// Import a batch of records, then run one rescore cycle over the full store
/// so every event (new and old) carries a fresh significance.
pub fn import_events(
    conn: &mut Connection,
    records: &[ImportRecord],
    cache: &mut DedupCache,
) -> Result<ImportReport> {
    let mut imported = 0;
    let mut skipped = 0;

    for record in records {
        match import_record(conn, record, cache)? {
            ImportOutcome::Imported(_) => imported += 1,
            ImportOutcome::Duplicate => skipped += 1,
        }
    }

    let rescored = store::rescore_all(conn)?.rescored;
    tracing::info!(imported, skipped, rescored, "import complete");

    Ok(ImportReport { imported, skipped, rescored })
}

fn asset_exists(conn: &Connection, asset_id: &str) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM events WHERE asset_id = ?1",
        [asset_id],
        |row| row.get(0),
    )?;
    Ok(exists)
}
