pub mod add;
pub mod edit;
pub mod export;
pub mod import;
pub mod list;
pub mod rescore;
pub mod reset;
pub mod show;
pub mod stats;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse an event date from the command line.
///
/// Accepts a full RFC 3339 instant or a bare `YYYY-MM-DD` date, which is
/// taken as noon UTC so day arithmetic is stable across timezones.
pub fn parse_event_date(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected RFC 3339 or YYYY-MM-DD): {input}"))?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .context("invalid time of day")?;
    Ok(DateTime::from_naive_utc_and_offset(noon, Utc))
}
