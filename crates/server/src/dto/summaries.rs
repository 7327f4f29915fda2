//! # Summary Data Transfer Objects
//!
//! Response types for the weekly/cyclical dashboards and the locality
//! drill-down.

use serde::Serialize;
use summary::{CycleSummary, LocalitySelection, WeekSummary};

/// Response for the weekly dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySummariesResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Week summaries, ascending by numeric week
    pub weeks:   Vec<WeekSummary>,
}

/// Response for the cyclical dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSummariesResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Cycle summaries, ascending by modality then numeric cycle
    pub cycles:  Vec<CycleSummary>,
}

/// Response for a locality drill-down
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionResponse {
    /// Whether the operation was successful
    pub success:   bool,
    /// Current and historical records for the locality
    #[serde(flatten)]
    pub selection: LocalitySelection,
}
