//! Permissive date parsing with ISO 8601 date output.
//!
//! Input values are tried against an explicit format list; each attempt is
//! a checked `Result`, there is no catch-all. Day-first forms are tried
//! before month-first, so ambiguous values like `03/04/2024` resolve
//! day-first.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMATS: [&str; 12] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y", // day-first: 15/01/2024
    "%m/%d/%Y", // month-first: 01/15/2024
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",  // 15-Jan-2024
    "%d %b %Y",  // 15 Jan 2024
    "%d %B %Y",  // 15 January 2024
    "%b %d, %Y", // Jan 15, 2024
    "%B %d, %Y", // January 15, 2024
    "%Y%m%d",    // compact: 20240115
];

const DATETIME_FORMATS: [&str; 7] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parse a date or datetime value, keeping only the date component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Normalize a raw date value to `YYYY-MM-DD`, or `None` when unparseable.
pub fn clean_date(raw: Option<&str>) -> Option<String> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    parse_date(value).map(|date| date.format("%Y-%m-%d").to_string())
}
