use super::*;
use crate::logic::dataset::{Dataset, LabeledRecord};
use crate::logic::features::FeatureVector;
use crate::logic::model::{LogisticParams, ModelArtifact};
use tempfile::tempdir;

/// Three separated clusters, `per_class` rows each, deterministic jitter
fn clustered_dataset(per_class: usize) -> Dataset {
    let centers = [
        ((32.0, 112.0, 88.0, 68.0), "Healthy"),
        ((58.0, 165.0, 95.0, 76.0), "Hypertension"),
        ((50.0, 118.0, 230.0, 74.0), "Diabetes"),
    ];
    let mut records = Vec::new();
    for i in 0..per_class {
        let jitter = (i % 5) as f64 - 2.0;
        for ((a, b, g, h), label) in centers.iter() {
            records.push(LabeledRecord::new(
                FeatureVector::new(a + jitter, b + jitter * 1.5, g + jitter * 2.0, h - jitter),
                *label,
            ));
        }
    }
    Dataset::new(records).unwrap()
}

fn sized_dataset(sizes: &[(&str, usize)]) -> Dataset {
    let mut records = Vec::new();
    for (class_idx, (label, n)) in sizes.iter().enumerate() {
        for i in 0..*n {
            let base = 30.0 + class_idx as f64 * 20.0;
            records.push(LabeledRecord::new(
                FeatureVector::new(base + i as f64 * 0.5, 110.0 + class_idx as f64 * 30.0, 90.0, 70.0),
                *label,
            ));
        }
    }
    Dataset::new(records).unwrap()
}

#[test]
fn test_fold_plan_is_stratified() {
    let dataset = sized_dataset(&[("A", 10), ("B", 10)]);
    let plan = plan_folds(&dataset, 5).unwrap();

    assert_eq!(plan.used, 5);
    for fold in 0..5 {
        let (_, test) = plan.split(fold);
        let a = test.iter().filter(|&&i| dataset.records()[i].diagnosis == "A").count();
        let b = test.len() - a;
        assert_eq!((a, b), (2, 2), "fold {} is not balanced", fold);
    }
}

#[test]
fn test_fold_plan_covers_every_record_once() {
    let dataset = sized_dataset(&[("A", 7), ("B", 9), ("C", 6)]);
    let plan = plan_folds(&dataset, 5).unwrap();

    let mut seen = vec![0usize; dataset.len()];
    for fold in 0..plan.used {
        let (train, test) = plan.split(fold);
        assert_eq!(train.len() + test.len(), dataset.len());
        for idx in test {
            seen[idx] += 1;
        }
    }
    assert!(seen.iter().all(|&c| c == 1));
}

#[test]
fn test_folds_reduced_to_smallest_class() {
    let dataset = sized_dataset(&[("A", 10), ("B", 3)]);
    let plan = plan_folds(&dataset, 5).unwrap();

    assert_eq!(plan.requested, 5);
    assert_eq!(plan.used, 3);
}

#[test]
fn test_single_member_class_fails() {
    let dataset = sized_dataset(&[("A", 10), ("B", 1)]);

    match plan_folds(&dataset, 5).unwrap_err() {
        TrainingError::InsufficientClassMembers { label, count, required } => {
            assert_eq!(label, "B");
            assert_eq!(count, 1);
            assert_eq!(required, 2);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_single_class_fails() {
    let dataset = sized_dataset(&[("A", 10)]);
    assert!(matches!(plan_folds(&dataset, 5), Err(TrainingError::SingleClass(_))));
}

#[test]
fn test_fold_count_below_two_rejected() {
    let dataset = sized_dataset(&[("A", 5), ("B", 5)]);
    assert!(matches!(plan_folds(&dataset, 1), Err(TrainingError::InvalidConfig(_))));
}

#[test]
fn test_cross_validation_is_reproducible() {
    let dataset = clustered_dataset(10);
    let params = LogisticParams::default();

    let first = cross_validate(&dataset, 5, &params).unwrap();
    let second = cross_validate(&dataset, 5, &params).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.fold_scores.len(), 5);
}

#[test]
fn test_train_reports_bounded_metrics() {
    let dataset = clustered_dataset(20);
    let outcome = train(&dataset, &TrainerConfig::default()).unwrap();
    let report = &outcome.report;

    assert_eq!(report.total_samples, 60);
    assert_eq!(report.test_samples, 12);
    assert_eq!(report.train_samples, 48);
    assert_eq!(report.seed, 42);
    assert_eq!(report.classes, vec!["Diabetes", "Healthy", "Hypertension"]);
    assert_eq!(report.cross_validation.folds_used, 5);

    for acc in [report.train_accuracy, report.test_accuracy, report.cross_validation.mean_accuracy] {
        assert!((0.0..=1.0).contains(&acc));
    }
    for s in &report.cross_validation.fold_scores {
        assert!((0.0..=1.0).contains(s));
    }
    assert!(report.train_accuracy > 0.9);
}

#[test]
fn test_train_is_reproducible_for_same_seed() {
    let dataset = clustered_dataset(12);
    let config = TrainerConfig::default();

    let a = train(&dataset, &config).unwrap();
    let b = train(&dataset, &config).unwrap();

    assert_eq!(a.report, b.report);
    assert_eq!(a.pipeline, b.pipeline);
}

#[test]
fn test_train_rejects_zero_iteration_cap() {
    let dataset = clustered_dataset(10);
    let config = TrainerConfig {
        params: LogisticParams { max_iter: 0, ..Default::default() },
        ..Default::default()
    };

    assert!(matches!(train(&dataset, &config), Err(TrainingError::InvalidConfig(_))));
}

#[test]
fn test_train_from_csv_writes_loadable_artifact() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("vitals.csv");
    let artifact_path = dir.path().join("out").join("model.json");

    let mut csv = String::from("age,blood_pressure,glucose_level,heart_rate,diagnosis\n");
    for record in clustered_dataset(10).records() {
        let f = record.features;
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            f.age, f.blood_pressure, f.glucose_level, f.heart_rate, record.diagnosis
        ));
    }
    std::fs::write(&csv_path, csv).unwrap();

    let artifact = train_from_csv(&csv_path, &artifact_path, &TrainerConfig::default()).unwrap();
    let loaded = ModelArtifact::load(&artifact_path).unwrap();

    assert_eq!(loaded, artifact);
}

#[test]
fn test_train_from_csv_missing_file() {
    let dir = tempdir().unwrap();
    let result = train_from_csv(
        &dir.path().join("absent.csv"),
        &dir.path().join("model.json"),
        &TrainerConfig::default(),
    );

    assert!(matches!(result, Err(TrainingError::Data(_))));
    assert!(!dir.path().join("model.json").exists());
}

#[test]
fn test_scaler_statistics_come_from_training_partition_only() {
    // Quadratic ages: any held-out subset shifts the mean noticeably
    let labels = ["Healthy", "Hypertension", "Diabetes"];
    let records = (0..30)
        .map(|i| {
            let x = i as f64;
            LabeledRecord::new(
                FeatureVector::new(18.0 + x * x, 110.0 + x, 90.0 + 3.0 * x, 60.0 + (i % 7) as f64),
                labels[i % 3],
            )
        })
        .collect();
    let dataset = Dataset::new(records).unwrap();
    let config = TrainerConfig::default();

    let outcome = train(&dataset, &config).unwrap();
    let scaler = outcome.pipeline.scaler();
    assert_eq!(scaler.n_samples(), outcome.report.train_samples);

    let split = dataset.train_test_split(config.test_size, config.seed).unwrap();
    let column_means = |d: &Dataset| -> Vec<f64> {
        let rows = d.feature_rows();
        (0..4)
            .map(|c| rows.iter().map(|r| r[c]).sum::<f64>() / rows.len() as f64)
            .collect()
    };
    let train_means = column_means(&split.train);
    let full_means = column_means(&dataset);

    for (fitted, expected) in scaler.mean().iter().zip(&train_means) {
        assert!((fitted - expected).abs() < 1e-9, "scaler mean {} vs train mean {}", fitted, expected);
    }
    assert!((scaler.mean()[0] - full_means[0]).abs() > 1e-6);
}
