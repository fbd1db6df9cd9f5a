use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::loader::RawRow;
use super::model::{Dataset, Record};

/// Maximum title length kept on a record, in characters.
pub const TITLE_MAX: usize = 200;
/// Sentinel title for rows without one.
pub const NO_TITLE: &str = "No title";
/// Sentinel source for rows without one.
pub const UNKNOWN_SOURCE: &str = "Unknown";

// ---------------------------------------------------------------------------
// ColumnMap – which source columns feed which record fields
// ---------------------------------------------------------------------------

/// Source column names, configurable so one core serves any number of
/// differently-labelled uploads. Defaults match the legacy export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub keyword: String,
    pub title: String,
    pub business_units: String,
    pub competitors: String,
    pub published_at: String,
    pub source: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            keyword: "keyword".into(),
            title: "newstitle".into(),
            business_units: "SBU".into(),
            competitors: "Competitor".into(),
            published_at: "publishedate".into(),
            source: "source".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Turn raw uploaded rows into a [`Dataset`].
///
/// Best-effort ingestion: a missing or malformed field degrades to its
/// default, never drops the row. Output order equals input order.
pub fn normalize(rows: &[RawRow], columns: &ColumnMap) -> Dataset {
    normalize_at(rows, columns, Utc::now())
}

/// Like [`normalize`], with an explicit fallback timestamp for rows whose
/// publish date is missing or unparseable.
pub fn normalize_at(rows: &[RawRow], columns: &ColumnMap, now: DateTime<Utc>) -> Dataset {
    let records = rows
        .iter()
        .map(|row| normalize_row(row, columns, now))
        .collect();
    Dataset::from_records(records)
}

fn normalize_row(row: &RawRow, columns: &ColumnMap, now: DateTime<Utc>) -> Record {
    let published_at = match field(row, &columns.published_at) {
        Some(raw) => parse_timestamp(raw).unwrap_or_else(|| {
            log::warn!("unparseable publish date {raw:?}, falling back to now");
            now
        }),
        None => now,
    };

    Record {
        keyword: field(row, &columns.keyword).unwrap_or("").to_string(),
        title: field(row, &columns.title)
            .map(|t| truncate_chars(t, TITLE_MAX))
            .unwrap_or_else(|| NO_TITLE.to_string()),
        business_units: split_multi(field(row, &columns.business_units).unwrap_or("")),
        competitors: split_multi(field(row, &columns.competitors).unwrap_or("")),
        published_at,
        source_name: field(row, &columns.source)
            .unwrap_or(UNKNOWN_SOURCE)
            .to_string(),
    }
}

/// Fetch a cell, trimmed; absent and whitespace-only cells read as missing.
fn field<'a>(row: &'a RawRow, name: &str) -> Option<&'a str> {
    row.get(name).map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Split a comma-separated multi-value cell into clean tags: trimmed,
/// empties dropped, duplicates collapsed, first-occurrence order kept.
fn split_multi(cell: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in cell.split(',') {
        let token = token.trim();
        if token.is_empty() || tags.iter().any(|t| t == token) {
            continue;
        }
        tags.push(token.to_string());
    }
    tags
}

/// Truncate on a character boundary (titles may contain multi-byte text).
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Accept the timestamp shapes the legacy exports actually contain:
/// RFC 3339, `YYYY-MM-DD HH:MM:SS`, bare `YYYY-MM-DD`, and `MM/DD/YYYY`.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
            let ndt = date.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    None
}
