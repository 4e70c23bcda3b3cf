//! Significance scoring — the one pure computation in the crate.
//!
//! [`recompute`] assigns every event a score in `[0, 1]` from a logistic
//! model over weighted features: category weight, user weight, engagement,
//! distance from the earliest event in the set, and the favorite flag. The
//! function is total and deterministic; it performs no I/O and never fails.

use chrono::{DateTime, Utc};

use crate::event::types::Event;

/// Coefficient on the combined category + user weight.
const ALPHA: f64 = 4.2;
/// Coefficient on `ln(1 + engagement)` — diminishing returns per interaction.
const BETA_ENGAGEMENT: f64 = 0.07;
/// Coefficient on the inverse gap-days term. Earlier events get the larger
/// bonus; the earliest event(s) land on the gap floor and take the maximum.
const BETA_RECENCY: f64 = 1.3;
/// Flat bonus for favorited events.
const BETA_FAVORITE: f64 = 2.0;

/// Recompute `significance` for every event in place.
///
/// Only the `significance` field is written; all other fields and the slice
/// order are left untouched. The result depends on the event fields plus the
/// set's minimum date, never on input order. Empty input is a no-op.
pub fn recompute(events: &mut [Event]) {
    let Some(min_date) = events.iter().map(|e| e.date).min() else {
        return;
    };

    for event in events.iter_mut() {
        event.significance = score_event(event, min_date);
    }
}

/// Score a single event against the set's minimum date.
fn score_event(event: &Event, min_date: DateTime<Utc>) -> f64 {
    let gap_days = gap_days(event.date, min_date);

    let raw = ALPHA * (event.event_type.default_weight() + event.user_weight)
        + BETA_ENGAGEMENT * (1.0 + f64::from(event.engagement)).ln()
        + BETA_RECENCY / gap_days
        + BETA_FAVORITE * f64::from(u8::from(event.favorite));

    // Logistic output is already in (0, 1); the clamp guards float edge cases.
    logistic(raw).clamp(0.0, 1.0)
}

/// Whole days between an event and the earliest event, floored at 1.
///
/// The floor keeps the inverse recency term finite for the earliest event(s).
fn gap_days(date: DateTime<Utc>, min_date: DateTime<Utc>) -> f64 {
    let days = date.signed_duration_since(min_date).num_days();
    days.max(1) as f64
}

/// Standard logistic function `1 / (1 + e^(-x))`.
fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
