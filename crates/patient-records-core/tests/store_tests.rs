//! Record store integration tests.

use patient_records_core::store::{RecordStore, StoreConfig, StoreError, ValidationError};
use patient_records_core::PatientUpdate;

#[test]
fn test_clinic_scenario() {
    let mut store = RecordStore::new();
    store.add("p1", "Alice", 28, 60.0, 1.60).unwrap();
    store.add("p2", "Bob", 35, 80.0, 1.80).unwrap();

    assert_eq!(store.average_age(), Some(31.5));
    assert_eq!(store.get("p1").unwrap().name, "Alice");

    store.update("p1", &PatientUpdate::new().age(29)).unwrap();

    let record = store.get("p1").unwrap();
    assert_eq!(record.age, 29);
    assert_eq!(record.name, "Alice");
    assert_eq!(record.weight, 60.0);
    assert_eq!(record.height, 1.60);
}

#[test]
fn test_average_age_of_three() {
    let mut store = RecordStore::new();
    assert_eq!(store.average_age(), None);

    for (i, age) in [30, 40, 50].into_iter().enumerate() {
        store
            .add(format!("patient-{}", i), format!("Patient {}", i), age, 70.0, 1.7)
            .unwrap();
    }

    assert_eq!(store.average_age(), Some(40.0));
}

#[test]
fn test_average_bmi_single_record() {
    let mut store = RecordStore::new();
    assert_eq!(store.average_bmi(), None);

    store.add("p1", "Alice", 40, 70.0, 1.75).unwrap();

    let bmi = store.average_bmi().unwrap();
    assert_eq!(bmi, 70.0 / (1.75 * 1.75));
    assert!((bmi - 22.857).abs() < 1e-3);
}

#[test]
fn test_invalid_records_rejected() {
    let mut store = RecordStore::new();

    let cases: Vec<(&str, &str, u32, f64, f64, &str)> = vec![
        ("", "Alice", 28, 60.0, 1.6, "id"),
        ("p1", "", 28, 60.0, 1.6, "name"),
        ("p1", "Alice", 0, 60.0, 1.6, "age"),
        ("p1", "Alice", 28, 0.0, 1.6, "weight"),
        ("p1", "Alice", 28, -60.0, 1.6, "weight"),
        ("p1", "Alice", 28, 60.0, 0.0, "height"),
        ("p1", "Alice", 28, 60.0, -1.6, "height"),
    ];

    for (id, name, age, weight, height, field) in cases {
        match store.add(id, name, age, weight, height) {
            Err(StoreError::Validation(e)) => assert_eq!(e.field(), field),
            other => panic!("expected validation error on {}, got {:?}", field, other),
        }
    }

    assert!(store.is_empty());
}

#[test]
fn test_update_missing_leaves_store_unchanged() {
    let mut store = RecordStore::new();
    store.add("p1", "Alice", 28, 60.0, 1.60).unwrap();
    let before: Vec<_> = store.records().cloned().collect();

    let err = store
        .update("p9", &PatientUpdate::new().name("Zed").age(50))
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let after: Vec<_> = store.records().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn test_get_missing() {
    let store = RecordStore::new();
    assert!(matches!(store.get("p1"), Err(StoreError::NotFound(id)) if id == "p1"));
}

#[test]
fn test_unchecked_update_accepts_invalid_value() {
    let mut store = RecordStore::new();
    store.add("p1", "Alice", 28, 60.0, 1.60).unwrap();

    store.update("p1", &PatientUpdate::new().height(-1.0)).unwrap();
    assert_eq!(store.get("p1").unwrap().height, -1.0);
}

#[test]
fn test_validated_update_policy() {
    let config = StoreConfig::from_json(r#"{"update_policy":"validated"}"#).unwrap();
    let mut store = RecordStore::with_config(config);
    store.add("p1", "Alice", 28, 60.0, 1.60).unwrap();

    let err = store
        .update("p1", &PatientUpdate::new().weight(62.0).height(0.0))
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::NonPositiveHeight(_))
    ));
    assert_eq!(store.get("p1").unwrap().weight, 60.0);

    store
        .update("p1", &PatientUpdate::new().weight(62.0))
        .unwrap();
    assert_eq!(store.get("p1").unwrap().weight, 62.0);
}

#[test]
fn test_independent_stores() {
    let mut first = RecordStore::new();
    let second = RecordStore::new();

    first.add("p1", "Alice", 28, 60.0, 1.60).unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert!(second.get("p1").is_err());
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut store = RecordStore::new();
    for id in ["c", "a", "b"] {
        store.add(id, "Patient", 30, 70.0, 1.7).unwrap();
    }
    store.add("a", "Renamed", 31, 71.0, 1.7).unwrap();

    let ids: Vec<_> = store.records().map(|r| r.id.clone()).collect();
    assert_eq!(ids, vec!["c", "a", "b"]);
}
