//! # Summary Engine
//!
//! Groups flat inspection records into weekly and cyclical running-sum
//! summaries and narrows the record set to a single locality for drill-down.
//! Summaries are never persisted; they are rebuilt from the records on every
//! call.
//!
//! - [`aggregate`]: grouping by epidemiological week or (modality, cycle)
//! - [`selection`]: per-locality current/history views
//! - [`coerce`]: boundary parsing of form-typed numeric fields

pub mod aggregate;
pub mod coerce;
pub mod selection;

pub use aggregate::{
    cycles_sorted,
    group_by_cycle,
    group_by_week,
    summaries_sorted_by_week,
    CycleSummary,
    WeekSummary,
};
pub use selection::{select_locality, LocalitySelection};
