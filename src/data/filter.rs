use serde::{Deserialize, Serialize};

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// FilterCriteria – the active filter selections
// ---------------------------------------------------------------------------

/// The four filter options the UI may pass. `None` (or an empty keyword
/// substring) means "All": that criterion is a no-op. Active criteria
/// combine as a conjunction; each is evaluated independently.
///
/// The engine never stores criteria; the caller supplies them fresh on
/// every invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    /// Keep records whose business-unit set contains this value.
    pub business_unit: Option<String>,
    /// Keep records whose competitor set contains this value.
    pub competitor: Option<String>,
    /// Keep records whose keyword contains this substring,
    /// case-insensitive.
    pub keyword_substring: String,
    /// Keep records whose source name equals this value exactly.
    pub source_name: Option<String>,
}

impl FilterCriteria {
    /// Map a dropdown selection onto a criterion: the literal `"All"`
    /// (or a blank) means no constraint.
    pub fn selection(value: &str) -> Option<String> {
        let value = value.trim();
        if value.is_empty() || value == "All" {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Whether a record passes every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        self.matches_with(record, &self.keyword_substring.to_lowercase())
    }

    /// `needle` is the lowercased `keyword_substring`;
    /// [`filtered_indices`] lowercases it once per pass.
    fn matches_with(&self, record: &Record, needle: &str) -> bool {
        if let Some(unit) = &self.business_unit {
            if !record.has_business_unit(unit) {
                return false;
            }
        }
        if let Some(competitor) = &self.competitor {
            if !record.has_competitor(competitor) {
                return false;
            }
        }
        if !needle.is_empty() {
            // An empty keyword never matches a non-empty substring.
            if !record.keyword.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some(source) = &self.source_name {
            if record.source_name != *source {
                return false;
            }
        }
        true
    }
}

/// Return indices of records passing all active criteria, in dataset
/// order.
pub fn filtered_indices(dataset: &Dataset, criteria: &FilterCriteria) -> Vec<usize> {
    let needle = criteria.keyword_substring.to_lowercase();
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches_with(rec, &needle))
        .map(|(i, _)| i)
        .collect()
}
