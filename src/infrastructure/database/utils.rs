//! Database utility functions.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a stored timestamp, accepting RFC3339 and SQLite's default format.
///
/// Rows written by this system are RFC3339; rows enqueued by upstream SQL
/// jobs tend to arrive as "YYYY-MM-DD HH:MM:SS" and are read as UTC.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}
