//! Tests for the persisted sample store.
//!
//! These tests verify:
//! - Import shape validation
//! - Silent discarding of unusable entries
//! - Export/import round trips
//! - Merging stored samples into a roster

use petstat::*;
use std::collections::BTreeMap;

// ============================================================================
// Import validation
// ============================================================================

#[test]
fn test_import_non_object_is_malformed() {
    let err = SampleStore::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, PetError::MalformedImport(_)));
    assert!(err.to_string().contains("an array"));
}

#[test]
fn test_import_invalid_json_is_malformed() {
    assert!(matches!(
        SampleStore::from_json("{\"Bat\": "),
        Err(PetError::MalformedImport(_))
    ));
}

#[test]
fn test_import_entity_not_object_is_malformed() {
    assert!(matches!(
        SampleStore::from_json(r#"{"Bat": 4}"#),
        Err(PetError::MalformedImport(_))
    ));
}

#[test]
fn test_import_discards_entries_without_failing() {
    let store = SampleStore::from_json(
        r#"{
            "Bat":  { "1": 4, "-2": 3, "1.5": 9, "2": true },
            "Wolf": { "3": 12.25 }
        }"#,
    )
    .unwrap();

    assert_eq!(store.get(&"Bat".into()).unwrap().len(), 1);
    assert_eq!(store.get(&"Wolf".into()).unwrap().get(&3), Some(&12.25));
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_export_import_roundtrip() {
    let mut store = SampleStore::new();
    for (i, name) in ["Bat", "Wolf", "Fire Fox"].iter().enumerate() {
        for level in 1..=12u32 {
            let value = (level as f64) * (i as f64 + 1.0) / 7.0 + 0.1;
            store.insert(name, level, value).unwrap();
        }
    }

    let exported = store.to_json().unwrap();
    let imported = SampleStore::from_json(&exported).unwrap();
    assert_eq!(imported, store);
}

#[test]
fn test_rejected_inserts_keep_roundtrip_exact() {
    let mut store = SampleStore::new();
    assert!(store.insert(" ", 1, 1.0).is_err());
    assert!(store.insert("Wolf", 0, 2.0).is_err());
    assert!(store.insert("Ant", 3, f64::NAN).is_err());
    store.insert(" Bat", 1, 1.0).unwrap();

    let back = SampleStore::from_json(&store.to_json().unwrap()).unwrap();
    assert_eq!(back, store);
    assert_eq!(back.len(), 1);
}

#[test]
fn test_export_is_plain_nested_object() {
    let mut store = SampleStore::new();
    store.insert("Bat", 3, 1.5).unwrap();

    let parsed: BTreeMap<String, BTreeMap<String, f64>> =
        serde_json::from_str(&store.to_json().unwrap()).unwrap();
    assert_eq!(parsed["Bat"]["3"], 1.5);
}

// ============================================================================
// Roster integration
// ============================================================================

#[test]
fn test_import_into_roster_and_project() {
    let store = SampleStore::from_json(r#"{"Bat": {"1": 10, "2": 20, "3": 30}}"#).unwrap();

    let mut roster = Roster::new();
    roster.insert(Entity::formula("Slime", 2.0, 10.0));
    assert_eq!(store.merge_into(&mut roster, StatKind::Damage), 3);

    let bat = roster.get(&"Bat".into()).unwrap();
    assert_eq!(value_at_level(bat, StatKind::Damage, 10), Some(100.0));
}

#[test]
fn test_import_overwrites_existing_levels() {
    let mut roster = Roster::new();
    roster.record_sample("Bat", StatKind::Damage, 1, 1.0).unwrap();
    roster.record_sample("Bat", StatKind::Damage, 2, 2.0).unwrap();

    let store = SampleStore::from_json(r#"{"Bat": {"2": 5}}"#).unwrap();
    store.merge_into(&mut roster, StatKind::Damage);

    let samples = roster.get(&"Bat".into()).unwrap().samples(StatKind::Damage).unwrap();
    assert_eq!(samples.get(2), Some(5.0));
    assert_eq!(samples.len(), 2);
}

#[test]
fn test_roster_export_skips_formula_pets() {
    let mut roster = Roster::new();
    roster.insert(Entity::formula("Slime", 2.0, 10.0));
    roster.record_sample("Bat", StatKind::Health, 4, 44.0).unwrap();

    assert!(SampleStore::from_roster(&roster, StatKind::Damage).is_empty());
    let health = SampleStore::from_roster(&roster, StatKind::Health);
    assert_eq!(health.len(), 1);
    assert_eq!(health.get(&"Bat".into()).unwrap().get(&4), Some(&44.0));
}

#[test]
fn test_roster_roundtrip_through_json() {
    let mut roster = Roster::new();
    roster.record_sample("Bat", StatKind::Damage, 1, 0.1).unwrap();
    roster.record_sample("Bat", StatKind::Damage, 7, 2.0 / 3.0).unwrap();
    roster.record_sample("Wolf", StatKind::Damage, 2, 1e-7).unwrap();

    let json = SampleStore::from_roster(&roster, StatKind::Damage)
        .to_json()
        .unwrap();

    let mut restored = Roster::new();
    SampleStore::from_json(&json)
        .unwrap()
        .merge_into(&mut restored, StatKind::Damage);

    for id in roster.ids() {
        assert_eq!(
            restored.get(id).unwrap().samples(StatKind::Damage),
            roster.get(id).unwrap().samples(StatKind::Damage)
        );
    }
}
