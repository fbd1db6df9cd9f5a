use std::path::Path;

use anyhow::{Context, Result};

use crate::data;
use crate::data::aggregate::AggregateView;
use crate::data::filter::FilterCriteria;
use crate::data::loader::{self, RawRow};
use crate::data::model::Dataset;
use crate::data::normalize::{self, ColumnMap};

// ---------------------------------------------------------------------------
// Session – dataset ownership and lifecycle
// ---------------------------------------------------------------------------

/// Owns the dataset for one user session, with an explicit
/// create/replace/destroy lifecycle tied to uploads.
///
/// Each upload replaces the dataset wholesale; there is no incremental
/// merge. A failed upload leaves the previous dataset untouched and
/// surfaces the error instead.
pub struct Session {
    /// Current dataset (None until the first successful upload).
    dataset: Option<Dataset>,

    /// Source column layout applied to every upload in this session.
    columns: ColumnMap,

    /// Status / error message for the UI to display.
    pub status_message: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(ColumnMap::default())
    }
}

impl Session {
    pub fn new(columns: ColumnMap) -> Self {
        Session {
            dataset: None,
            columns,
            status_message: None,
        }
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn row_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, Dataset::len)
    }

    /// Load and normalize an uploaded file, replacing the current
    /// dataset. Returns the number of records ingested.
    pub fn upload_file(&mut self, path: &Path) -> Result<usize> {
        let rows = match loader::load_file(path) {
            Ok(rows) => rows,
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
                return Err(e).with_context(|| format!("loading {}", path.display()));
            }
        };
        log::info!("loaded {} raw rows from {}", rows.len(), path.display());
        Ok(self.upload_rows(&rows))
    }

    /// Ingest rows already parsed by an external uploader.
    pub fn upload_rows(&mut self, rows: &[RawRow]) -> usize {
        let dataset = normalize::normalize(rows, &self.columns);
        let count = dataset.len();
        log::info!(
            "installed dataset: {count} records, {} business units, {} competitors",
            dataset.business_units.len(),
            dataset.competitors.len()
        );
        self.dataset = Some(dataset);
        self.status_message = None;
        count
    }

    /// Run one engine pass with the given criteria. With no dataset
    /// loaded, returns an empty subset and a zeroed view.
    pub fn apply(&self, criteria: &FilterCriteria) -> (Vec<usize>, AggregateView) {
        match &self.dataset {
            Some(dataset) => data::apply(dataset, criteria),
            None => (Vec::new(), AggregateView::default()),
        }
    }

    /// Drop the dataset (end of session).
    pub fn clear(&mut self) {
        self.dataset = None;
        self.status_message = None;
    }

    // Dropdown population for the UI.

    pub fn business_units(&self) -> impl Iterator<Item = &str> {
        self.dataset
            .iter()
            .flat_map(|d| d.business_units.iter())
            .map(String::as_str)
    }

    pub fn competitors(&self) -> impl Iterator<Item = &str> {
        self.dataset
            .iter()
            .flat_map(|d| d.competitors.iter())
            .map(String::as_str)
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.dataset
            .iter()
            .flat_map(|d| d.sources.iter())
            .map(String::as_str)
    }
}
