//! # Record Normalizer
//! Turns raw corpus records into the canonical three-field shape with a
//! parsed calendar date. Records whose date is absent or unparsable are
//! dropped silently: this is best-effort cleansing of a known-dirty dump,
//! not validation.

use chrono::NaiveDate;

use crate::record::{NormalizedRecord, RawRecord};

/// Plain-date shapes accepted before falling back to timestamp parsing.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a raw timestamp string into a calendar date, or `None`.
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // Full timestamps: keep the date part only.
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    None
}

/// Lazily normalize raw records, dropping any without a usable date.
///
/// Pure and deterministic: same input, same output, independent of run order.
pub fn normalize(
    records: impl IntoIterator<Item = RawRecord>,
) -> impl Iterator<Item = NormalizedRecord> {
    records.into_iter().filter_map(|r| {
        let publish_date = r.date.as_deref().and_then(parse_publish_date)?;
        Some(NormalizedRecord {
            headline: r.headline,
            category: r.category,
            publish_date,
        })
    })
}
