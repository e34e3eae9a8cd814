//! Lenient date parsing for dates typed on the command line.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate};

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%Y%m%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

/// Parse a calendar date from any of the formats people tend to type,
/// or the date part of an RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(date);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.date_naive());
    }

    Err(anyhow!(
        "Could not parse date '{}'. Try YYYY-MM-DD",
        input
    ))
}
