//! Multinomial Logistic Regression
//!
//! Softmax over one linear score per class, L2 penalty on the coefficients
//! (intercepts are not penalized). Minimizes
//! `mean cross-entropy + ||W||^2 / (2 * C * n)`, the per-sample form of the
//! usual `C * sum(loss) + ||W||^2 / 2` objective, with full-batch gradient
//! descent until the largest gradient entry drops below `tolerance`.
//!
//! Step size is `1 / L` with `L = (mean ||x||^2 + 1) / 2 + lambda`, an upper
//! bound on the softmax loss curvature, so descent is monotone for any input
//! scale.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::logic::features::FEATURE_COUNT;

// ============================================================================
// PARAMETERS
// ============================================================================

pub const DEFAULT_C: f64 = 1.0;
pub const DEFAULT_MAX_ITER: usize = 5000;
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Inverse regularization strength
    pub c: f64,
    /// Iteration cap. Low caps under-converge on this feature scale.
    pub max_iter: usize,
    /// Stop when max |gradient| falls below this
    pub tolerance: f64,
}

impl Default for LogisticParams {
    fn default() -> Self {
        Self {
            c: DEFAULT_C,
            max_iter: DEFAULT_MAX_ITER,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

// ============================================================================
// MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    classes: Vec<String>,
    /// One row per class, one column per feature
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    n_iter: usize,
    converged: bool,
}

impl LogisticRegression {
    /// Fit on already-scaled rows. `targets[i]` indexes into `classes`.
    pub(crate) fn fit(
        x: &Array2<f64>,
        targets: &[usize],
        classes: Vec<String>,
        params: &LogisticParams,
    ) -> Self {
        let (n, d) = x.dim();
        let k = classes.len();

        let mut onehot = Array2::<f64>::zeros((n, k));
        for (i, &t) in targets.iter().enumerate() {
            onehot[[i, t]] = 1.0;
        }

        let mut weights = Array2::<f64>::zeros((k, d));
        let mut bias = Array1::<f64>::zeros(k);
        let n_f = n.max(1) as f64;
        let lambda = 1.0 / (params.c * n_f);
        let mean_sq_norm = x.iter().map(|v| v * v).sum::<f64>() / n_f;
        let step = 1.0 / (0.5 * (mean_sq_norm + 1.0) + lambda);

        let mut n_iter = 0;
        let mut converged = false;

        while n_iter < params.max_iter {
            let mut probs = x.dot(&weights.t()) + &bias;
            softmax_rows(&mut probs);

            let residual = probs - &onehot;
            let grad_w = residual.t().dot(x) / n_f + &weights * lambda;
            let grad_b = residual.sum_axis(Axis(0)) / n_f;

            let max_grad = grad_w
                .iter()
                .chain(grad_b.iter())
                .fold(0.0f64, |m, g| m.max(g.abs()));
            if max_grad < params.tolerance {
                converged = true;
                break;
            }

            weights.scaled_add(-step, &grad_w);
            bias.scaled_add(-step, &grad_b);
            n_iter += 1;
        }

        if !converged {
            log::warn!(
                "Logistic regression did not converge within {} iterations (tolerance {})",
                params.max_iter,
                params.tolerance
            );
        }

        Self {
            classes,
            coefficients: weights.outer_iter().map(|row| row.to_vec()).collect(),
            intercepts: bias.to_vec(),
            n_iter,
            converged,
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn coefficients(&self) -> &[Vec<f64>] {
        &self.coefficients
    }

    pub fn intercepts(&self) -> &[f64] {
        &self.intercepts
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Class probabilities for one already-scaled row, in `classes` order
    pub(crate) fn probabilities(&self, scaled: &[f64; FEATURE_COUNT]) -> Vec<f64> {
        let mut scores: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(coef, b)| b + coef.iter().zip(scaled).map(|(w, z)| w * z).sum::<f64>())
            .collect();
        softmax_in_place(&mut scores);
        scores
    }

    pub(crate) fn check_shape(&self) -> Result<(), String> {
        let k = self.classes.len();
        if k == 0 {
            return Err("classifier has no classes".to_string());
        }
        if self.coefficients.len() != k || self.intercepts.len() != k {
            return Err(format!(
                "classifier has {} classes but {} coefficient rows and {} intercepts",
                k,
                self.coefficients.len(),
                self.intercepts.len()
            ));
        }
        if self.coefficients.iter().any(|row| row.len() != FEATURE_COUNT) {
            return Err(format!("classifier coefficient rows must have {} entries", FEATURE_COUNT));
        }
        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|v| v.is_finite());
        if !all_finite {
            return Err("classifier parameters must be finite".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// SOFTMAX
// ============================================================================

fn softmax_rows(scores: &mut Array2<f64>) {
    for mut row in scores.rows_mut() {
        let max = row.fold(f64::NEG_INFINITY, |m, &v| m.max(v));
        row.mapv_inplace(|v| (v - max).exp());
        let sum = row.sum();
        row /= sum;
    }
}

fn softmax_in_place(scores: &mut [f64]) {
    let max = scores.iter().fold(f64::NEG_INFINITY, |m, &v| m.max(v));
    for s in scores.iter_mut() {
        *s = (*s - max).exp();
    }
    let sum: f64 = scores.iter().sum();
    for s in scores.iter_mut() {
        *s /= sum;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_blobs() -> (Array2<f64>, Vec<usize>) {
        let x = array![
            [-2.0, -1.5, -1.0, -2.0],
            [-1.5, -2.0, -1.2, -1.0],
            [-1.0, -1.0, -2.0, -1.5],
            [1.0, 1.5, 2.0, 1.0],
            [2.0, 1.0, 1.5, 1.2],
            [1.5, 2.0, 1.0, 2.0],
        ];
        (x, vec![0, 0, 0, 1, 1, 1])
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let mut scores = vec![1000.0, 999.0, -5.0];
        softmax_in_place(&mut scores);
        let total: f64 = scores.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!(scores[0] > scores[1] && scores[1] > scores[2]);
    }

    #[test]
    fn test_fit_separates_blobs_and_converges() {
        let (x, y) = two_blobs();
        let model = LogisticRegression::fit(&x, &y, vec!["A".into(), "B".into()], &LogisticParams::default());

        assert!(model.converged());
        assert!(model.n_iter() < DEFAULT_MAX_ITER);
        assert!(model.check_shape().is_ok());

        let low = model.probabilities(&[-2.0, -2.0, -2.0, -2.0]);
        let high = model.probabilities(&[2.0, 2.0, 2.0, 2.0]);
        assert!(low[0] > 0.9);
        assert!(high[1] > 0.9);
    }

    #[test]
    fn test_low_iteration_cap_reports_non_convergence() {
        let (x, y) = two_blobs();
        let params = LogisticParams {
            max_iter: 2,
            ..Default::default()
        };
        let model = LogisticRegression::fit(&x, &y, vec!["A".into(), "B".into()], &params);

        assert!(!model.converged());
        assert_eq!(model.n_iter(), 2);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (x, y) = two_blobs();
        let classes = vec!["A".to_string(), "B".to_string()];
        let a = LogisticRegression::fit(&x, &y, classes.clone(), &LogisticParams::default());
        let b = LogisticRegression::fit(&x, &y, classes, &LogisticParams::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_check_shape_rejects_ragged_coefficients() {
        let (x, y) = two_blobs();
        let mut model = LogisticRegression::fit(&x, &y, vec!["A".into(), "B".into()], &LogisticParams::default());
        model.coefficients[1].pop();
        assert!(model.check_shape().is_err());
    }
}
