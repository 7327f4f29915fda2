//! # Aggregation Engine
//!
//! Builds running-sum summaries keyed by epidemiological week or by
//! (work modality, cycle). Buckets are created lazily with zero totals;
//! iteration order of the input never changes the totals, only the order of
//! each bucket's locality list, which preserves input order.
//!
//! Week keys are not validated here: a record with a non-numeric week still
//! produces a bucket. Numeric interpretation happens only at sort time and
//! degrades gracefully for unparseable keys.

use std::collections::HashMap;

use entity::inspection_records::Model as InspectionRecord;
use serde::Serialize;

/// Running totals for one epidemiological week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekSummary {
    /// Week key exactly as it appears on the records.
    pub week:                      String,
    pub total_properties:          i64,
    pub total_inspections:         i64,
    pub total_deposits_eliminated: i64,
    pub total_deposits_treated:    i64,
    /// Contributing records in input order.
    pub localities:                Vec<InspectionRecord>,
}

impl WeekSummary {
    fn empty(week: &str) -> Self {
        Self {
            week:                      week.to_string(),
            total_properties:          0,
            total_inspections:         0,
            total_deposits_eliminated: 0,
            total_deposits_treated:    0,
            localities:                Vec::new(),
        }
    }

    fn add(&mut self, record: &InspectionRecord) {
        self.total_properties += record.total_properties;
        self.total_inspections += record.inspections;
        self.total_deposits_eliminated += record.deposits_eliminated;
        self.total_deposits_treated += record.deposits_treated;
        self.localities.push(record.clone());
    }
}

/// Running totals for one (work modality, cycle) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleSummary {
    pub work_modality:             String,
    pub cycle:                     String,
    pub total_properties:          i64,
    pub total_inspections:         i64,
    pub total_deposits_eliminated: i64,
    pub total_deposits_treated:    i64,
    /// Contributing records in input order.
    pub localities:                Vec<InspectionRecord>,
}

impl CycleSummary {
    fn empty(work_modality: &str, cycle: &str) -> Self {
        Self {
            work_modality:             work_modality.to_string(),
            cycle:                     cycle.to_string(),
            total_properties:          0,
            total_inspections:         0,
            total_deposits_eliminated: 0,
            total_deposits_treated:    0,
            localities:                Vec::new(),
        }
    }

    fn add(&mut self, record: &InspectionRecord) {
        self.total_properties += record.total_properties;
        self.total_inspections += record.inspections;
        self.total_deposits_eliminated += record.deposits_eliminated;
        self.total_deposits_treated += record.deposits_treated;
        self.localities.push(record.clone());
    }
}

/// Group records by epidemiological week, accumulating the four numeric
/// fields into each week's running totals.
#[must_use]
pub fn group_by_week(records: &[InspectionRecord]) -> HashMap<String, WeekSummary> {
    let mut summaries: HashMap<String, WeekSummary> = HashMap::new();

    for record in records {
        summaries
            .entry(record.epidemiological_week.clone())
            .or_insert_with(|| WeekSummary::empty(&record.epidemiological_week))
            .add(record);
    }

    summaries
}

/// Group records by (work modality, cycle).
#[must_use]
pub fn group_by_cycle(records: &[InspectionRecord]) -> HashMap<(String, String), CycleSummary> {
    let mut summaries: HashMap<(String, String), CycleSummary> = HashMap::new();

    for record in records {
        summaries
            .entry((record.work_modality.clone(), record.cycle.clone()))
            .or_insert_with(|| CycleSummary::empty(&record.work_modality, &record.cycle))
            .add(record);
    }

    summaries
}

/// Sort key for a week or cycle identifier: the integer value, with
/// unparseable keys sorting first instead of panicking.
fn numeric_key(s: &str) -> i64 { s.trim().parse::<i64>().unwrap_or(i64::MIN) }

/// Week summaries ascending by the week key interpreted as an integer
/// ("9" sorts before "10", not lexically).
#[must_use]
pub fn summaries_sorted_by_week(summaries: HashMap<String, WeekSummary>) -> Vec<WeekSummary> {
    let mut values: Vec<WeekSummary> = summaries.into_values().collect();
    values.sort_by_key(|s| numeric_key(&s.week));
    values
}

/// Cycle summaries ascending by work modality, then by the cycle identifier
/// interpreted as an integer.
#[must_use]
pub fn cycles_sorted(summaries: HashMap<(String, String), CycleSummary>) -> Vec<CycleSummary> {
    let mut values: Vec<CycleSummary> = summaries.into_values().collect();
    values.sort_by(|a, b| {
        a.work_modality
            .cmp(&b.work_modality)
            .then_with(|| numeric_key(&a.cycle).cmp(&numeric_key(&b.cycle)))
    });
    values
}
