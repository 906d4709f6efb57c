use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{DataError, Dataset};

/// Train/held-out partition of one dataset
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    pub train: Dataset,
    pub test: Dataset,
}

impl Dataset {
    /// Shuffle with a seeded RNG, hold out `ceil(len * test_size)` rows.
    ///
    /// Same data + same seed gives the same partition.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<TrainTestSplit, DataError> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(DataError::InvalidSplit(format!(
                "test_size must be in (0, 1), got {}",
                test_size
            )));
        }

        let n = self.len();
        let n_test = (n as f64 * test_size).ceil() as usize;
        if n_test == 0 || n_test >= n {
            return Err(DataError::InvalidSplit(format!(
                "{} records cannot be split with test_size {}",
                n, test_size
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);

        log::debug!("Split {} records: {} train / {} test (seed {})", n, train_idx.len(), test_idx.len(), seed);

        Ok(TrainTestSplit {
            train: self.subset(train_idx),
            test: self.subset(test_idx),
        })
    }
}
