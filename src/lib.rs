//! Chronicle — a personal life-event journal with significance scoring.
//!
//! Chronicle stores timestamped life events (residence changes, jobs,
//! vacations, photos, ...) in a local SQLite database and assigns each a
//! significance score in `[0, 1]` from a logistic model over weighted
//! features: category weight, user weight, engagement, distance from the
//! earliest event, and the favorite flag. Scores are recomputed for the
//! whole journal after every mutation, so what is persisted is never stale.
//!
//! # Architecture
//!
//! - **Storage**: SQLite (WAL) with CHECK constraints enforcing the
//!   data-model ranges and an audit log of every mutation
//! - **Scoring**: a pure, deterministic pass over the full event set,
//!   run inside the same transaction that reads and writes it
//! - **Import**: JSON bulk import deduplicated by external asset id
//!   through a bounded LRU cache
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — SQLite database initialization, schema, and migrations
//! - [`event`] — Core event engine: types, scoring, store, import, and stats

pub mod config;
pub mod db;
pub mod event;
