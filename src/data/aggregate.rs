use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::model::Dataset;

/// How many entries the ranked views keep.
pub const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// AggregateView – derived summaries over a filtered subset
// ---------------------------------------------------------------------------

/// Summary statistics over a filtered subset. A pure function of the
/// subset: recomputed on every call, never cached or mutated in place.
/// All fields are well-defined for an empty subset (zero counts, empty
/// sequences, `date_range = None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateView {
    /// Number of records in the filtered subset.
    pub total: usize,
    /// Unique non-empty keywords.
    pub distinct_keywords: usize,
    /// Unique business units across the subset.
    pub distinct_business_units: usize,
    /// Unique competitors across the subset.
    pub distinct_competitors: usize,
    /// Unique source names across the subset.
    pub distinct_sources: usize,
    /// Earliest and latest publish date; `None` means "no data".
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Records per calendar date, ascending. Sums to `total`.
    pub counts_by_date: Vec<(NaiveDate, usize)>,
    /// Top keywords by exact (case-sensitive) match, descending count,
    /// ties in first-encountered order, at most [`TOP_N`] entries.
    pub top_keywords: Vec<(String, usize)>,
    /// Records per business unit, descending count. Buckets are not
    /// mutually exclusive: a record with two units counts in both, so
    /// the bucket sum may exceed `total`.
    pub business_unit_counts: Vec<(String, usize)>,
    /// Top competitors, same bucket rule as business units, at most
    /// [`TOP_N`] entries.
    pub top_competitors: Vec<(String, usize)>,
}

/// Occurrence counter that remembers first-seen order, so the stable
/// descending sort breaks ties by encounter order.
#[derive(Default)]
struct Counter {
    entries: Vec<(String, usize)>,
}

impl Counter {
    fn bump(&mut self, key: &str) {
        match self.entries.iter_mut().find(|e| e.0 == key) {
            Some(entry) => entry.1 += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    fn distinct(&self) -> usize {
        self.entries.len()
    }

    /// Entries sorted by descending count; `sort_by` is stable, so equal
    /// counts stay in first-encountered order.
    fn ranked(mut self) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Compute every aggregate view over the filtered subset identified by
/// `indices`. Runs strictly after filtering; a single O(n·k) pass.
pub fn aggregate(dataset: &Dataset, indices: &[usize]) -> AggregateView {
    let mut keywords = Counter::default();
    let mut business_units = Counter::default();
    let mut competitors = Counter::default();
    let mut sources = Counter::default();
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();

    for &idx in indices {
        let rec = &dataset.records[idx];

        if !rec.keyword.is_empty() {
            keywords.bump(&rec.keyword);
        }
        for unit in &rec.business_units {
            business_units.bump(unit);
        }
        for competitor in &rec.competitors {
            competitors.bump(competitor);
        }
        sources.bump(&rec.source_name);
        *by_date.entry(rec.published_at.date_naive()).or_insert(0) += 1;
    }

    let date_range = match (by_date.keys().next(), by_date.keys().next_back()) {
        (Some(&first), Some(&last)) => Some((first, last)),
        _ => None,
    };

    let distinct_keywords = keywords.distinct();
    let distinct_business_units = business_units.distinct();
    let distinct_competitors = competitors.distinct();
    let distinct_sources = sources.distinct();

    let mut top_keywords = keywords.ranked();
    top_keywords.truncate(TOP_N);
    let mut top_competitors = competitors.ranked();
    top_competitors.truncate(TOP_N);

    AggregateView {
        total: indices.len(),
        distinct_keywords,
        distinct_business_units,
        distinct_competitors,
        distinct_sources,
        date_range,
        counts_by_date: by_date.into_iter().collect(),
        top_keywords,
        business_unit_counts: business_units.ranked(),
        top_competitors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_ranks_by_count_then_first_seen() {
        let mut counter = Counter::default();
        for key in ["b", "a", "c", "a"] {
            counter.bump(key);
        }
        assert_eq!(
            counter.ranked(),
            vec![
                ("a".to_string(), 2),
                ("b".to_string(), 1),
                ("c".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_subset_yields_zeroed_view() {
        let view = aggregate(&Dataset::default(), &[]);
        assert_eq!(view, AggregateView::default());
        assert_eq!(view.date_range, None);
    }
}
