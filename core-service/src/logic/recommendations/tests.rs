use super::*;
use std::collections::BTreeMap;

#[test]
fn test_default_table_has_every_known_condition() {
    let table = RecommendationTable::default();
    let labels: Vec<&str> = table.labels().collect();

    assert_eq!(
        labels,
        vec![
            "Age_Related_Hypertension",
            "Diabetes",
            "Healthy",
            "Hypertension",
            "Hypertension_Diabetes",
            "Tachycardia"
        ]
    );
}

#[test]
fn test_known_label_lookup() {
    let table = RecommendationTable::default();
    let rec = table.lookup("Diabetes");

    assert!(!rec.is_fallback());
    assert_eq!(rec.medicines.len(), 3);
    assert_eq!(rec.medicines[0].name, "Metformin 500mg");
    assert_eq!(table.fallback_events(), 0);
}

#[test]
fn test_unknown_label_falls_back_to_healthy() {
    let table = RecommendationTable::default();
    let rec = table.lookup("Bradycardia");

    assert_eq!(rec.label, "Bradycardia");
    assert_eq!(rec.medicines, table.lookup(FALLBACK_KEY).medicines);
    assert_eq!(
        rec.fallback,
        Some(LookupMiss {
            requested: "Bradycardia".to_string(),
            served: "Healthy".to_string(),
        })
    );
    assert_eq!(table.fallback_events(), 1);
}

#[test]
fn test_fallback_counter_accumulates() {
    let table = RecommendationTable::default();
    table.lookup("A");
    table.lookup("B");
    table.lookup("Healthy");

    assert_eq!(table.fallback_events(), 2);
}

#[test]
fn test_unmapped_labels_reported() {
    let table = RecommendationTable::default();
    let classes = vec!["Healthy".to_string(), "Zeta".to_string(), "Diabetes".to_string(), "Alpha".to_string()];

    assert_eq!(table.unmapped(&classes), vec!["Alpha", "Zeta"]);
}

#[test]
fn test_custom_table_requires_fallback() {
    let mut entries = BTreeMap::new();
    entries.insert("Diabetes".to_string(), vec![Medicine::new("X", "Y", "Low risk", "Z")]);
    assert!(RecommendationTable::new(entries.clone()).is_err());

    entries.insert(FALLBACK_KEY.to_string(), vec![]);
    let table = RecommendationTable::new(entries).unwrap();
    assert!(table.contains("Diabetes"));
}

#[test]
fn test_severity_mapping() {
    assert_eq!(ConditionSeverity::from_label("Healthy"), ConditionSeverity::Normal);
    assert_eq!(ConditionSeverity::from_label("Diabetes"), ConditionSeverity::Moderate);
    assert_eq!(ConditionSeverity::from_label("Age_Related_Hypertension"), ConditionSeverity::Moderate);
    assert_eq!(ConditionSeverity::from_label("Tachycardia"), ConditionSeverity::High);
    assert_eq!(ConditionSeverity::from_label("Hypertension_Diabetes"), ConditionSeverity::High);
    assert_eq!(ConditionSeverity::from_label("Other"), ConditionSeverity::Unknown);
    assert!(ConditionSeverity::Normal.advice().contains("normal ranges"));
}
