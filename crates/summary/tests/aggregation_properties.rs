//! Property-style tests for the summary engine: conservation of totals
//! under grouping, numeric week ordering, and selector behavior.

use entity::inspection_records::Model as InspectionRecord;
use summary::{group_by_cycle, group_by_week, select_locality, summaries_sorted_by_week};

fn record(
    locality: &str,
    week: &str,
    cycle: &str,
    modality: &str,
    counts: (i64, i64, i64, i64),
    end: (i32, u32, u32),
) -> InspectionRecord {
    InspectionRecord {
        id:                   0,
        municipality:         "Recife".to_string(),
        locality:             locality.to_string(),
        cycle:                cycle.to_string(),
        epidemiological_week: week.to_string(),
        work_modality:        modality.to_string(),
        start_date:           chrono::NaiveDate::from_ymd_opt(end.0, end.1, 1).unwrap(),
        end_date:             chrono::NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        total_properties:     counts.0,
        inspections:          counts.1,
        deposits_eliminated:  counts.2,
        deposits_treated:     counts.3,
        supervisor:           "Marcos".to_string(),
        created_at:           chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

fn fixture() -> Vec<InspectionRecord> {
    vec![
        record("Centro", "9", "1", "LI", (120, 100, 7, 3), (2024, 1, 10)),
        record("Boa Vista", "9", "1", "LI", (80, 75, 2, 1), (2024, 1, 11)),
        record("Centro", "10", "1", "LI", (130, 110, 4, 2), (2024, 2, 5)),
        record("Casa Forte", "10", "2", "PE", (60, 58, 1, 0), (2024, 2, 7)),
        record("Centro", "11", "2", "PE", (140, 120, 9, 5), (2024, 3, 4)),
    ]
}

#[test]
fn grouping_conserves_all_four_totals() {
    let records = fixture();
    let summaries = group_by_week(&records);

    let sum =
        |f: fn(&InspectionRecord) -> i64| -> i64 { records.iter().map(f).sum() };

    assert_eq!(
        summaries.values().map(|s| s.total_properties).sum::<i64>(),
        sum(|r| r.total_properties)
    );
    assert_eq!(
        summaries.values().map(|s| s.total_inspections).sum::<i64>(),
        sum(|r| r.inspections)
    );
    assert_eq!(
        summaries
            .values()
            .map(|s| s.total_deposits_eliminated)
            .sum::<i64>(),
        sum(|r| r.deposits_eliminated)
    );
    assert_eq!(
        summaries
            .values()
            .map(|s| s.total_deposits_treated)
            .sum::<i64>(),
        sum(|r| r.deposits_treated)
    );
}

#[test]
fn cycle_grouping_conserves_totals_too() {
    let records = fixture();
    let summaries = group_by_cycle(&records);

    let grouped: i64 = summaries.values().map(|s| s.total_properties).sum();
    let flat: i64 = records.iter().map(|r| r.total_properties).sum();
    assert_eq!(grouped, flat);
}

#[test]
fn each_summary_total_equals_the_sum_of_its_localities() {
    let records = fixture();
    for summary in group_by_week(&records).values() {
        assert_eq!(
            summary.total_properties,
            summary
                .localities
                .iter()
                .map(|r| r.total_properties)
                .sum::<i64>()
        );
        assert_eq!(
            summary.total_inspections,
            summary.localities.iter().map(|r| r.inspections).sum::<i64>()
        );
    }
}

#[test]
fn week_nine_sorts_before_week_ten() {
    let sorted = summaries_sorted_by_week(group_by_week(&fixture()));
    let weeks: Vec<&str> = sorted.iter().map(|s| s.week.as_str()).collect();
    assert_eq!(weeks, vec!["9", "10", "11"]);
}

#[test]
fn cleared_selection_is_empty() {
    let selection = select_locality(&fixture(), "");
    assert!(selection.current.is_none());
    assert!(selection.history.is_empty());
}

#[test]
fn centro_drill_down_orders_history_descending() {
    let selection = select_locality(&fixture(), "Centro");

    assert_eq!(
        selection.current.as_ref().unwrap().end_date,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    );
    assert_eq!(selection.history.len(), 3);
    let dates: Vec<chrono::NaiveDate> = selection.history.iter().map(|r| r.end_date).collect();
    let mut sorted_desc = dates.clone();
    sorted_desc.sort_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted_desc);
}

#[test]
fn selection_recomputes_from_a_grown_record_set() {
    let mut records = fixture();
    let before = select_locality(&records, "Centro");
    assert_eq!(before.history.len(), 3);

    records.push(record("Centro", "12", "2", "PE", (10, 9, 0, 0), (2024, 4, 2)));
    let after = select_locality(&records, "Centro");
    assert_eq!(after.history.len(), 4);
    assert_eq!(
        after.current.unwrap().end_date,
        chrono::NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
    );
}
