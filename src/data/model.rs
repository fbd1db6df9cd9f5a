use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one normalized row of competitor/news data
// ---------------------------------------------------------------------------

/// A single mention record (one row of the uploaded table), with every
/// field validated and defaulted at construction time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    /// Trimmed search keyword; empty when the source cell was absent.
    pub keyword: String,
    /// Headline, at most 200 characters; `"No title"` when absent.
    pub title: String,
    /// Strategic business units tagged on this mention. Never contains
    /// empty or whitespace-only entries; duplicates collapsed, split
    /// order preserved.
    pub business_units: Vec<String>,
    /// Competitors named in this mention. Same guarantees as
    /// `business_units`.
    pub competitors: Vec<String>,
    /// Publish timestamp. Always valid; unparseable source dates fall
    /// back to the ingestion time.
    pub published_at: DateTime<Utc>,
    /// Trimmed publication name; `"Unknown"` when absent.
    pub source_name: String,
}

impl Record {
    /// Whether this record carries the given business unit tag.
    pub fn has_business_unit(&self, unit: &str) -> bool {
        self.business_units.iter().any(|u| u == unit)
    }

    /// Whether this record names the given competitor.
    pub fn has_competitor(&self, competitor: &str) -> bool {
        self.competitors.iter().any(|c| c == competitor)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete upload
// ---------------------------------------------------------------------------

/// The full normalized dataset for one upload, in source row order, with
/// pre-computed unique-value indices for populating filter dropdowns.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All records (rows).
    pub records: Vec<Record>,
    /// Sorted set of every business unit appearing in the dataset.
    pub business_units: BTreeSet<String>,
    /// Sorted set of every competitor appearing in the dataset.
    pub competitors: BTreeSet<String>,
    /// Sorted set of every source name appearing in the dataset.
    pub sources: BTreeSet<String>,
}

impl Dataset {
    /// Build the unique-value indices from normalized records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut business_units = BTreeSet::new();
        let mut competitors = BTreeSet::new();
        let mut sources = BTreeSet::new();

        for rec in &records {
            business_units.extend(rec.business_units.iter().cloned());
            competitors.extend(rec.competitors.iter().cloned());
            sources.insert(rec.source_name.clone());
        }

        Dataset {
            records,
            business_units,
            competitors,
            sources,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
