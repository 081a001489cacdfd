//! Workout activity records as they arrive from the outside world.
//!
//! Records are loosely validated on purpose: a bad date string is not an
//! error, it simply means "no activity recorded that day" once the heatmap
//! builder resolves it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
};

/// Number of workouts logged on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// ISO calendar date (`YYYY-MM-DD`). RFC 3339 timestamps are accepted and
    /// truncated to their date part.
    pub date: String,
    pub count: u32,
}

impl ActivityRecord {
    pub fn new<T: Into<String>>(date: T, count: u32) -> Self {
        Self {
            date: date.into(),
            count,
        }
    }

    /// Build a record from an already-parsed date.
    pub fn on(date: Date, count: u32) -> Self {
        Self {
            date: format_iso_date(date),
            count,
        }
    }

    /// The calendar day this record refers to, or `None` when the date string
    /// is malformed.
    pub fn day(&self) -> Option<Date> {
        parse_iso_date(&self.date)
    }
}

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("activity payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("activity payload must be a JSON array of records")]
    NotAnArray,
}

/// Parse a JSON array of `{ "date": ..., "count": ... }` objects.
///
/// Entries that fail to deserialize (missing fields, negative or fractional
/// counts, wrong types) are dropped rather than failing the whole payload.
pub fn parse_activity_json(raw: &str) -> Result<Vec<ActivityRecord>, ActivityError> {
    let Value::Array(entries) = serde_json::from_str::<Value>(raw)? else {
        return Err(ActivityError::NotAnArray);
    };

    let total = entries.len();
    let records: Vec<ActivityRecord> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        tracing::debug!(dropped, total, "dropped malformed activity entries");
    }

    Ok(records)
}

/// Parse `YYYY-MM-DD` (surrounding whitespace allowed) or a full RFC 3339
/// timestamp, keeping only its calendar date.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .or_else(|| OffsetDateTime::parse(raw, &Rfc3339).ok().map(|ts| ts.date()))
}

pub fn format_iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_default()
}
