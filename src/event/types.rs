//! Core event type definitions.
//!
//! Defines [`EventType`] (the twelve life-event categories with fixed default
//! importance weights) and [`Event`] (a full record matching the `events`
//! table schema).

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The twelve life-event categories.
///
/// Each carries a fixed default importance weight in `[0, 1]` used by the
/// significance scorer; the weight reflects how much a category matters on
/// its own, before any per-event adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// Moving house, changing city or country.
    Residence,
    /// Starting, changing, or leaving a job.
    Job,
    /// Degrees, courses, graduations.
    Education,
    /// Trips and holidays.
    Vacation,
    /// A single imported photo.
    Photo,
    /// Workouts, races, health milestones.
    Fitness,
    /// Purchases, investments, financial milestones.
    Finance,
    /// Meeting someone, anniversaries, breakups.
    Relationship,
    /// Diagnoses, treatments, recoveries.
    Medical,
    /// Concerts, exhibitions, books, films.
    Cultural,
    /// Small day-to-day moments.
    Micro,
    /// Personal projects started or shipped.
    Project,
}

/// All categories, in default-weight order (highest first).
pub const ALL_EVENT_TYPES: [EventType; 12] = [
    EventType::Relationship,
    EventType::Residence,
    EventType::Project,
    EventType::Job,
    EventType::Medical,
    EventType::Education,
    EventType::Vacation,
    EventType::Finance,
    EventType::Fitness,
    EventType::Micro,
    EventType::Cultural,
    EventType::Photo,
];

impl EventType {
    /// SQL-compatible string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residence => "residence",
            Self::Job => "job",
            Self::Education => "education",
            Self::Vacation => "vacation",
            Self::Photo => "photo",
            Self::Fitness => "fitness",
            Self::Finance => "finance",
            Self::Relationship => "relationship",
            Self::Medical => "medical",
            Self::Cultural => "cultural",
            Self::Micro => "micro",
            Self::Project => "project",
        }
    }

    /// Default importance weight for this category, in `[0, 1]`.
    pub fn default_weight(&self) -> f64 {
        match self {
            Self::Relationship => 0.95,
            Self::Residence => 0.90,
            Self::Project => 0.88,
            Self::Job => 0.85,
            Self::Medical => 0.80,
            Self::Education => 0.75,
            Self::Vacation => 0.70,
            Self::Finance => 0.60,
            Self::Fitness => 0.55,
            Self::Micro => 0.50,
            Self::Cultural => 0.45,
            Self::Photo => 0.40,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "residence" => Ok(Self::Residence),
            "job" => Ok(Self::Job),
            "education" => Ok(Self::Education),
            "vacation" => Ok(Self::Vacation),
            "photo" => Ok(Self::Photo),
            "fitness" => Ok(Self::Fitness),
            "finance" => Ok(Self::Finance),
            "relationship" => Ok(Self::Relationship),
            "medical" => Ok(Self::Medical),
            "cultural" => Ok(Self::Cultural),
            "micro" => Ok(Self::Micro),
            "project" => Ok(Self::Project),
            _ => Err(format!("unknown event type: {s}")),
        }
    }
}

/// An event record, matching the `events` table schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// UUID v7 (time-sortable) primary key.
    pub id: String,
    /// Category of this event.
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Short human-readable title.
    pub title: String,
    /// When the event occurred (UTC).
    pub date: DateTime<Utc>,
    /// User-supplied weight addition in `[0.0, 1.0]`. Added to the category
    /// default weight by the scorer.
    pub user_weight: f64,
    /// Number of times the user has interacted with this event.
    pub engagement: u32,
    /// Pinned as a favorite.
    pub favorite: bool,
    /// Computed significance score in `[0.0, 1.0]`. Written only by the
    /// scorer; 0.0 until the first rescore.
    pub significance: f64,
    /// External asset identifier (e.g. a photo-library asset), used to
    /// deduplicate bulk imports. `None` for manually entered events.
    pub asset_id: Option<String>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// ISO 8601 last-modification timestamp.
    pub updated_at: String,
    /// Arbitrary JSON metadata (e.g. `{"location": "Lisbon"}`).
    pub metadata: Option<serde_json::Value>,
}
