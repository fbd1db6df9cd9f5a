//! newslens – the data core behind a news / competitor-mention dashboard.
//!
//! The UI (file picker, charts, theming) lives elsewhere; this crate turns
//! an uploaded table into a normalized dataset and answers every filter
//! change with a filtered row-set plus derived aggregate views.

pub mod data;
pub mod session;

pub use data::aggregate::AggregateView;
pub use data::filter::FilterCriteria;
pub use data::loader::RawRow;
pub use data::model::{Dataset, Record};
pub use data::normalize::ColumnMap;
pub use session::Session;
