//! # Time Utilities
//!
//! Timestamps written by the in-memory backend and calendar days shown on
//! request and offer cards.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Format time the way the marketplace API stamps records
/// (`2024-01-15T10:00:00.000Z`).
pub fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Calendar day of a timestamp or date string.
///
/// RFC 3339 timestamps are converted to UTC first; a leading `YYYY-MM-DD`
/// is accepted as is.
pub fn calendar_day(moment: &str) -> Result<NaiveDate, Error> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(moment.trim()) {
        return Ok(parsed.with_timezone(&Utc).date_naive());
    }
    let head = moment.trim().get(..10).unwrap_or(moment);
    NaiveDate::parse_from_str(head, "%Y-%m-%d").map_err(|_| Error::FailToDateParse(moment.to_string()))
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
