//! In-memory time-series model for district finance data.
//!
//! Built in one pass from normalized records: canonical district names are
//! resolved (most recent reporting year wins), records are bucketed per
//! district under a `"{name} ({id})"` key, and the global year domain is
//! computed. Selection-time reads (dense series, year snapshots) never
//! mutate the model; a reload builds a whole new [`model::DataModel`] and
//! swaps it in atomically.

pub mod identity;
pub mod index;
pub mod model;
pub mod series;
pub mod years;
