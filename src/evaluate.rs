use std::fmt;

use crate::classify::VoteRule;
use crate::dataset::{Dataset, DimensionMask};
use crate::error::KnnError;
use crate::neighbors::rank_neighbors;

/// One configuration and its leave-one-out score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationResult {
    pub k: usize,
    pub mask: DimensionMask,
    pub score: usize,
    pub data_size: usize,
}

impl EvaluationResult {
    pub fn accuracy(&self) -> f64 {
        self.score as f64 / self.data_size as f64
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[mask {}] [K = {}] [{}/{}] [{:.0}%]",
            self.mask,
            self.k,
            self.score,
            self.data_size,
            self.accuracy() * 100.0
        )
    }
}

/// Holds each point out as the query once, ranks all others against it from
/// scratch, votes, and counts correct predictions.
pub fn leave_one_out(dataset: &Dataset, rule: &dyn VoteRule, k: usize) -> Result<usize, KnnError> {
    let required = (k + 1).max(2);
    if dataset.len() < required {
        return Err(KnnError::InsufficientData {
            required,
            available: dataset.len(),
        });
    }

    let mut score = 0;
    for point in dataset.points() {
        let neighbors = rank_neighbors(point, dataset);
        if rule.vote(&neighbors, k) == Some(point.label.as_str()) {
            score += 1;
        }
    }

    Ok(score)
}
