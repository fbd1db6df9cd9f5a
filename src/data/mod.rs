/// Data layer: core types, loading, normalization, filtering, aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Vec<RawRow>
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  normalize    │  defaults, trimming, date parsing → Dataset
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────────┐
///   │  filter   │ ───▶ │  aggregate    │  counts, rankings, date range
///   └──────────┘      └──────────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;

use aggregate::AggregateView;
use filter::FilterCriteria;
use model::Dataset;

/// Run the full engine pass: filter the dataset, then aggregate over the
/// filtered subset only. Recomputes from scratch on every call; nothing
/// is cached between invocations.
pub fn apply(dataset: &Dataset, criteria: &FilterCriteria) -> (Vec<usize>, AggregateView) {
    let indices = filter::filtered_indices(dataset, criteria);
    let view = aggregate::aggregate(dataset, &indices);
    (indices, view)
}
