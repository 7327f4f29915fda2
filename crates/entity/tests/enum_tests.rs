//! Simple enum and model tests for the entity crate

use entity::AccessLevel;

/// Test AccessLevel display values
#[test]
fn test_access_level_values() {
    assert_eq!(format!("{}", AccessLevel::Agente), "agente");
    assert_eq!(format!("{}", AccessLevel::Supervisor), "supervisor");
    assert_eq!(format!("{}", AccessLevel::Administrador), "administrador");
    assert_eq!(format!("{}", AccessLevel::Desconhecido), "desconhecido");
}

/// Test AccessLevel equality
#[test]
fn test_access_level_equality() {
    assert_eq!(AccessLevel::Agente, AccessLevel::Agente);
    assert_eq!(AccessLevel::Supervisor, AccessLevel::Supervisor);
    assert_ne!(AccessLevel::Agente, AccessLevel::Administrador);
}

/// Test AccessLevel serde representation
#[test]
fn test_access_level_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&AccessLevel::Administrador).unwrap(),
        "\"administrador\""
    );
    let back: AccessLevel = serde_json::from_str("\"supervisor\"").unwrap();
    assert_eq!(back, AccessLevel::Supervisor);
}

/// Test inspection record model serde round-trip (cache payload shape)
#[test]
fn test_inspection_record_round_trip() {
    let record = entity::inspection_records::Model {
        id:                   1,
        municipality:         "Recife".to_string(),
        locality:             "Centro".to_string(),
        cycle:                "3".to_string(),
        epidemiological_week: "12".to_string(),
        work_modality:        "LI".to_string(),
        start_date:           chrono::NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
        end_date:             chrono::NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        total_properties:     420,
        inspections:          395,
        deposits_eliminated:  31,
        deposits_treated:     12,
        supervisor:           "Marcos".to_string(),
        created_at:           chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
    };

    let json = serde_json::to_string(&record).unwrap();
    let back: entity::inspection_records::Model = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}
