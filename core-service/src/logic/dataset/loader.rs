use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_LAYOUT, LABEL_COLUMN};
use super::record::LabeledRecord;
use super::Dataset;

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Failed to open dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", join_columns(.0))]
    MissingColumns(Vec<String>),

    #[error("Invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Dataset contains no records")]
    Empty,

    #[error("Invalid split: {0}")]
    InvalidSplit(String),
}

fn join_columns(columns: &[String]) -> String {
    columns.join(", ")
}

/// Load a labelled dataset from a headered CSV file
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let dataset = from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} records ({} classes) from {}",
        dataset.len(),
        dataset.labels().len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any reader. Column order is free, extra columns are ignored.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h == name);

    let mut missing = Vec::new();
    let mut feature_columns = [0usize; FEATURE_COUNT];
    for (slot, name) in feature_columns.iter_mut().zip(FEATURE_LAYOUT) {
        match position(*name) {
            Some(idx) => *slot = idx,
            None => missing.push(name.to_string()),
        }
    }
    let label_column = position(LABEL_COLUMN);
    if label_column.is_none() {
        missing.push(LABEL_COLUMN.to_string());
    }

    let label_column = match label_column {
        Some(idx) if missing.is_empty() => idx,
        _ => return Err(DataError::MissingColumns(missing)),
    };

    let mut records = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row = row_idx + 1;
        let record = result?;

        let mut values = [0.0f64; FEATURE_COUNT];
        for ((value, &column), name) in values.iter_mut().zip(&feature_columns).zip(FEATURE_LAYOUT) {
            let raw = record.get(column).unwrap_or("");
            *value = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DataError::InvalidValue {
                    row,
                    column: name.to_string(),
                    value: raw.to_string(),
                })?;
        }

        let diagnosis = record.get(label_column).unwrap_or("");
        if diagnosis.is_empty() {
            return Err(DataError::InvalidValue {
                row,
                column: LABEL_COLUMN.to_string(),
                value: diagnosis.to_string(),
            });
        }

        records.push(LabeledRecord::new(FeatureVector::from_array(values), diagnosis));
    }

    Dataset::new(records)
}
