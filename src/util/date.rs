// src/util/date.rs
use chrono::NaiveDate;

/// Date layouts seen in Xplore exports, tried in order
const EXPORT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b. %Y",
    "%d %b %Y",
];

/// Parse a date cell of a metadata export.
///
/// Returns `None` for anything that is not a calendar date, which is how
/// early access items show up in the "Date Added To Xplore" column.
pub fn parse_export_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    EXPORT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
