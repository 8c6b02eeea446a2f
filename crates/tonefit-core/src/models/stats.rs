//! Aggregate statistics over a list of ratings.

use serde::{Deserialize, Serialize};

/// Mean, count and sample standard deviation of a rating list.
///
/// `sample_stdev` is 0 when fewer than two ratings are present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateStat {
    pub mean: f64,
    pub sample_count: usize,
    pub sample_stdev: f64,
}

impl AggregateStat {
    /// Aggregate a rating list. `None` for an empty list.
    pub fn from_ratings(ratings: &[u8]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let n = ratings.len() as f64;
        let mean = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / n;
        let sample_stdev = if ratings.len() < 2 {
            0.0
        } else {
            let sum_sq: f64 = ratings
                .iter()
                .map(|&r| (f64::from(r) - mean).powi(2))
                .sum();
            (sum_sq / (n - 1.0)).sqrt()
        };
        Some(Self {
            mean,
            sample_count: ratings.len(),
            sample_stdev,
        })
    }

    /// Whether there are at least `min_samples` observations.
    pub fn has_evidence(&self, min_samples: usize) -> bool {
        self.sample_count >= min_samples
    }
}
