use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

// ---------------------------------------------------------------------------
// RawRow – one untyped spreadsheet row
// ---------------------------------------------------------------------------

/// One raw uploaded row: column name → cell text, exactly as the external
/// uploader hands it over. Normalization happens downstream.
pub type RawRow = BTreeMap<String, String>;

/// A failed upload. The caller keeps whatever dataset it already had; no
/// partial rows are ever returned alongside an error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array of objects")]
    JsonShape,
    #[error("row {0}: expected a JSON object")]
    JsonRow(usize),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read an uploaded table into raw rows. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with column names, one record per line
/// * `.json` – records-oriented array: `[{ "keyword": "...", ... }, ...]`
pub fn load_file(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::Reader::from_reader(file);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let mut row = RawRow::new();
        for (idx, cell) in record.iter().enumerate() {
            if let Some(name) = headers.get(idx) {
                row.insert(name.clone(), cell.to_string());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected schema (records-oriented, the default `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "keyword": "acme", "newstitle": "...", "SBU": "Energy, Rail", ... },
///   ...
/// ]
/// ```
///
/// Scalar values are stringified; `null` cells are treated as absent.
fn load_json(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let records = root.as_array().ok_or(LoadError::JsonShape)?;

    let mut rows = Vec::with_capacity(records.len());
    for (i, rec) in records.iter().enumerate() {
        let obj = rec.as_object().ok_or(LoadError::JsonRow(i))?;
        let mut row = RawRow::new();
        for (key, val) in obj {
            if let Some(text) = json_to_cell(val) {
                row.insert(key.clone(), text);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

fn json_to_cell(val: &JsonValue) -> Option<String> {
    match val {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        other => Some(other.to_string()),
    }
}
