use super::{from_reader, load_csv, DataError, Dataset, LabeledRecord};
use crate::logic::features::FeatureVector;
use std::collections::BTreeSet;
use std::fs;
use tempfile::tempdir;

const SAMPLE_CSV: &str = "\
age,blood_pressure,glucose_level,heart_rate,diagnosis
45,118,92,70,Healthy
52,150,110,78,Hypertension
60,128,180,82,Diabetes
38,115,88,110,Tachycardia
29,112,95,68,Healthy
";

fn numbered_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| LabeledRecord::new(FeatureVector::new(20.0 + i as f64, 110.0, 90.0, 70.0), format!("C{}", i % 3)))
        .collect();
    Dataset::new(records).unwrap()
}

#[test]
fn test_parse_sample_csv() {
    let dataset = from_reader(SAMPLE_CSV.as_bytes()).unwrap();

    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.records()[1].diagnosis, "Hypertension");
    assert_eq!(dataset.records()[2].features, FeatureVector::new(60.0, 128.0, 180.0, 82.0));
    assert_eq!(dataset.labels(), vec!["Diabetes", "Healthy", "Hypertension", "Tachycardia"]);
    assert_eq!(dataset.class_counts()["Healthy"], 2);
}

#[test]
fn test_column_order_is_free_and_extras_ignored() {
    let csv = "patient_id,diagnosis,heart_rate,glucose_level,blood_pressure,age\n7,Healthy,70,92,118,45\n";
    let dataset = from_reader(csv.as_bytes()).unwrap();

    assert_eq!(dataset.records()[0].features, FeatureVector::new(45.0, 118.0, 92.0, 70.0));
}

#[test]
fn test_missing_columns_are_all_named() {
    let csv = "age,blood_pressure,heart_rate\n45,118,70\n";
    let err = from_reader(csv.as_bytes()).unwrap_err();

    match err {
        DataError::MissingColumns(cols) => assert_eq!(cols, vec!["glucose_level", "diagnosis"]),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_invalid_value_reports_row_and_column() {
    let csv = "age,blood_pressure,glucose_level,heart_rate,diagnosis\n45,118,92,70,Healthy\n50,high,92,70,Healthy\n";
    let err = from_reader(csv.as_bytes()).unwrap_err();

    match err {
        DataError::InvalidValue { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "blood_pressure");
            assert_eq!(value, "high");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_empty_label_rejected() {
    let csv = "age,blood_pressure,glucose_level,heart_rate,diagnosis\n45,118,92,70,\n";
    assert!(matches!(from_reader(csv.as_bytes()), Err(DataError::InvalidValue { .. })));
}

#[test]
fn test_header_only_is_empty() {
    let csv = "age,blood_pressure,glucose_level,heart_rate,diagnosis\n";
    assert!(matches!(from_reader(csv.as_bytes()), Err(DataError::Empty)));
}

#[test]
fn test_load_csv_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.csv");
    fs::write(&path, SAMPLE_CSV).unwrap();

    let dataset = load_csv(&path).unwrap();
    assert_eq!(dataset.len(), 5);

    assert!(matches!(load_csv(dir.path().join("missing.csv")), Err(DataError::Io { .. })));
}

#[test]
fn test_split_sizes_and_disjointness() {
    let dataset = numbered_dataset(50);
    let split = dataset.train_test_split(0.2, 42).unwrap();

    assert_eq!(split.test.len(), 10);
    assert_eq!(split.train.len(), 40);

    let ages = |d: &Dataset| d.records().iter().map(|r| r.features.age as i64).collect::<BTreeSet<_>>();
    let train = ages(&split.train);
    let test = ages(&split.test);
    assert!(train.is_disjoint(&test));
    assert_eq!(train.len() + test.len(), 50);
}

#[test]
fn test_split_is_reproducible_per_seed() {
    let dataset = numbered_dataset(30);

    let a = dataset.train_test_split(0.2, 42).unwrap();
    let b = dataset.train_test_split(0.2, 42).unwrap();
    assert_eq!(a.test, b.test);
    assert_eq!(a.train, b.train);

    let c = dataset.train_test_split(0.2, 7).unwrap();
    assert_ne!(a.test, c.test);
}

#[test]
fn test_split_rejects_degenerate_sizes() {
    let dataset = numbered_dataset(3);
    assert!(dataset.train_test_split(0.0, 1).is_err());
    assert!(dataset.train_test_split(1.0, 1).is_err());
    assert!(numbered_dataset(1).train_test_split(0.2, 1).is_err());
}

#[test]
fn test_summary_orders_by_frequency() {
    let dataset = from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let summary = dataset.summary();

    assert_eq!(summary.total_samples, 5);
    assert_eq!(summary.distribution[0].label, "Healthy");
    assert_eq!(summary.distribution[0].count, 2);
    assert!((summary.distribution[0].fraction - 0.4).abs() < 1e-12);
    let total: f64 = summary.distribution.iter().map(|c| c.fraction).sum();
    assert!((total - 1.0).abs() < 1e-12);
}
