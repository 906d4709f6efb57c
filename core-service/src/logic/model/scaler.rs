//! Standard Scaler
//!
//! Per-feature zero mean / unit variance, statistics learned from the
//! training rows only.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;

/// Scales below this are treated as constant features and left unscaled
const MIN_SCALE: f64 = 10.0 * f64::EPSILON;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    variance: Vec<f64>,
    scale: Vec<f64>,
    n_samples: usize,
}

impl StandardScaler {
    /// Population mean/variance per column. `x` must have at least one row.
    pub fn fit(x: &Array2<f64>) -> Self {
        let n_features = x.ncols();
        let mean = x
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_features));
        let variance = if x.nrows() > 0 {
            x.var_axis(Axis(0), 0.0)
        } else {
            Array1::zeros(n_features)
        };
        let scale = variance.mapv(|v| {
            let s = v.sqrt();
            if s < MIN_SCALE { 1.0 } else { s }
        });

        Self {
            mean: mean.to_vec(),
            variance: variance.to_vec(),
            scale: scale.to_vec(),
            n_samples: x.nrows(),
        }
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn variance(&self) -> &[f64] {
        &self.variance
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub(crate) fn transform(&self, x: &Array2<f64>) -> Array2<f64> {
        let mean = Array1::from(self.mean.clone());
        let scale = Array1::from(self.scale.clone());
        (x - &mean) / &scale
    }

    pub(crate) fn transform_row(&self, row: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0f64; FEATURE_COUNT];
        for (i, out) in scaled.iter_mut().enumerate() {
            *out = (row[i] - self.mean[i]) / self.scale[i];
        }
        scaled
    }

    pub(crate) fn check_shape(&self) -> Result<(), String> {
        let lengths = [self.mean.len(), self.variance.len(), self.scale.len()];
        if lengths.iter().any(|&len| len != FEATURE_COUNT) {
            return Err(format!("scaler expects {} features, found {:?}", FEATURE_COUNT, lengths));
        }
        if self.scale.iter().any(|&s| !s.is_finite() || s <= 0.0) || self.mean.iter().any(|m| !m.is_finite()) {
            return Err("scaler parameters must be finite with positive scale".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_population_statistics() {
        let x = array![[1.0, 10.0, 5.0, 0.0], [3.0, 20.0, 5.0, 0.0], [5.0, 30.0, 5.0, 0.0]];
        let scaler = StandardScaler::fit(&x);

        assert_eq!(scaler.mean(), &[3.0, 20.0, 5.0, 0.0]);
        assert!((scaler.variance()[0] - 8.0 / 3.0).abs() < 1e-12);
        assert!((scaler.variance()[1] - 200.0 / 3.0).abs() < 1e-12);
        // constant columns keep unit scale
        assert_eq!(scaler.scale()[2], 1.0);
        assert_eq!(scaler.scale()[3], 1.0);
        assert_eq!(scaler.n_samples(), 3);
    }

    #[test]
    fn test_transform_zero_mean_unit_variance() {
        let x = array![[18.0, 90.0, 70.0, 50.0], [50.0, 140.0, 150.0, 80.0], [90.0, 200.0, 300.0, 120.0]];
        let scaler = StandardScaler::fit(&x);
        let z = scaler.transform(&x);

        for col in z.columns() {
            assert!(col.mean().unwrap().abs() < 1e-12);
            assert!((col.var(0.0) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_transform_row_matches_batch() {
        let x = array![[20.0, 100.0, 80.0, 60.0], [70.0, 160.0, 200.0, 110.0]];
        let scaler = StandardScaler::fit(&x);
        let batch = scaler.transform(&x);

        let row = scaler.transform_row(&[70.0, 160.0, 200.0, 110.0]);
        for (a, b) in row.iter().zip(batch.row(1).iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
