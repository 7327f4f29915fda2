//! # Locality Selector
//!
//! Narrows the full record set to one locality's current and historical
//! records. Stateless: every call recomputes from the records it is given,
//! so a growing record set stays correct by total recomputation.

use entity::inspection_records::Model as InspectionRecord;
use serde::Serialize;

/// Current and historical view of one locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct LocalitySelection {
    /// Most recent record by end date, if any.
    pub current: Option<InspectionRecord>,
    /// All of the locality's records, most recent first.
    pub history: Vec<InspectionRecord>,
}

/// Select a locality's records by exact name match.
///
/// An empty name is the cleared selection and yields the no-selection state.
#[must_use]
pub fn select_locality(records: &[InspectionRecord], locality: &str) -> LocalitySelection {
    if locality.is_empty() {
        return LocalitySelection::default();
    }

    let mut history: Vec<InspectionRecord> = records
        .iter()
        .filter(|r| r.locality == locality)
        .cloned()
        .collect();
    history.sort_by(|a, b| b.end_date.cmp(&a.end_date));

    LocalitySelection {
        current: history.first().cloned(),
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(locality: &str, end: (i32, u32, u32)) -> InspectionRecord {
        InspectionRecord {
            id:                   0,
            municipality:         "Recife".to_string(),
            locality:             locality.to_string(),
            cycle:                "1".to_string(),
            epidemiological_week: "2".to_string(),
            work_modality:        "LI".to_string(),
            start_date:           chrono::NaiveDate::from_ymd_opt(end.0, end.1, 1).unwrap(),
            end_date:             chrono::NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            total_properties:     10,
            inspections:          8,
            deposits_eliminated:  2,
            deposits_treated:     1,
            supervisor:           "Marcos".to_string(),
            created_at:           chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn empty_name_is_the_cleared_selection() {
        let records = vec![record("Centro", (2024, 1, 10))];
        let selection = select_locality(&records, "");
        assert_eq!(selection.current, None);
        assert!(selection.history.is_empty());
    }

    #[test]
    fn most_recent_end_date_becomes_current() {
        let records = vec![
            record("Centro", (2024, 1, 10)),
            record("Centro", (2024, 2, 5)),
        ];
        let selection = select_locality(&records, "Centro");

        let current = selection.current.unwrap();
        assert_eq!(
            current.end_date,
            chrono::NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
        );
        assert_eq!(selection.history.len(), 2);
        assert!(selection.history[0].end_date > selection.history[1].end_date);
    }

    #[test]
    fn filter_is_exact_match() {
        let records = vec![
            record("Centro", (2024, 1, 10)),
            record("Centro Sul", (2024, 1, 12)),
        ];
        let selection = select_locality(&records, "Centro");
        assert_eq!(selection.history.len(), 1);
        assert_eq!(selection.history[0].locality, "Centro");
    }

    #[test]
    fn unknown_locality_yields_no_selection() {
        let records = vec![record("Centro", (2024, 1, 10))];
        let selection = select_locality(&records, "Boa Vista");
        assert_eq!(selection.current, None);
        assert!(selection.history.is_empty());
    }
}
