// Timestamp validation and range relationships.
//
// Purpose
// - Turn user supplied timestamp strings into instants on a single timeline.
// - Decide point-in-range and range-overlap relationships between spans.
//
// Boundaries
// - Pure and stateless. No input or output, no logging.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

const NAIVE_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid timestamp: {0:?}")]
pub struct InvalidTimestamp(pub String);

/// Parses `text` into an absolute instant.
///
/// Accepts RFC 3339, RFC 2822, ISO-8601 date-times without an offset and bare
/// calendar dates. Strings without an offset are read as UTC.
pub fn validate_timestamp(text: &str) -> Result<DateTime<Utc>, InvalidTimestamp> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(instant) = DateTime::parse_from_rfc2822(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| InvalidTimestamp(text.to_string()))
}

/// `start <= point < end`
pub fn is_in_half_open_range(
    point: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> bool {
    start <= point && point < end
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSpan {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Validates the start text before the end text, so a bad start is the one reported.
    pub fn parse(start_text: &str, end_text: &str) -> Result<Self, InvalidTimestamp> {
        let start = validate_timestamp(start_text)?;
        let end = validate_timestamp(end_text)?;
        Ok(Self { start, end })
    }

    pub fn contains_instant(&self, point: DateTime<Utc>) -> bool {
        is_in_half_open_range(point, self.start, self.end)
    }

    /// Half-open overlap. Whichever span starts later must start inside the other one,
    /// so touching endpoints never overlap.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        other.contains_instant(self.start) || self.contains_instant(other.start)
    }

    /// True when `other` lies entirely inside this span, bounds included.
    pub fn contains(&self, other: &TimeSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
