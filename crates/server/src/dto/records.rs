//! # Record Data Transfer Objects
//!
//! Request and response types for inspection-record endpoints. Numeric
//! fields arrive as strings from the form and are coerced at this boundary.

use entity::inspection_records::Model as InspectionRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to submit one inspection report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateRecordRequest {
    /// Municipality name
    pub municipality:         String,
    /// Locality name (required)
    #[validate(length(min = 1, message = "Locality is required"))]
    pub locality:             String,
    /// Operational cycle identifier
    pub cycle:                String,
    /// Epidemiological week key
    pub epidemiological_week: String,
    /// Work modality code
    pub work_modality:        String,
    /// Start date (`YYYY-MM-DD`)
    pub start_date:           String,
    /// End date (`YYYY-MM-DD`, must not precede the start)
    pub end_date:             String,
    /// Properties in the locality, as typed into the form
    pub total_properties:     String,
    /// Inspections performed, as typed into the form
    pub inspections:          String,
    /// Deposits eliminated, as typed into the form
    pub deposits_eliminated:  String,
    /// Deposits treated, as typed into the form
    pub deposits_treated:     String,
    /// Supervising agent
    pub supervisor:           String,
}

/// Response for one stored record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The stored record
    pub record:  InspectionRecord,
}

/// Response for the record list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// All records in insertion order
    pub records: Vec<InspectionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locality_is_required() {
        let req = CreateRecordRequest {
            municipality:         "Recife".to_string(),
            locality:             "".to_string(),
            cycle:                "1".to_string(),
            epidemiological_week: "9".to_string(),
            work_modality:        "LI".to_string(),
            start_date:           "2024-01-08".to_string(),
            end_date:             "2024-01-12".to_string(),
            total_properties:     "100".to_string(),
            inspections:          "90".to_string(),
            deposits_eliminated:  "5".to_string(),
            deposits_treated:     "2".to_string(),
            supervisor:           "Marcos".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
