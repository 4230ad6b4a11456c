use std::cmp::Ordering;

use ndarray::ArrayView1;

use crate::dataset::{DataPoint, Dataset, DIMENSIONS};

/// Euclidean distance over the first `dimensions` entries of both vectors.
pub fn euclidean_distance(first: &[f64], second: &[f64], dimensions: usize) -> f64 {
    let first = ArrayView1::from(&first[..dimensions]);
    let second = ArrayView1::from(&second[..dimensions]);

    let difference = &first - &second;
    difference.dot(&difference).sqrt()
}

/// A pool member with its distance to the query, valid for one ranking call.
#[derive(Debug, Clone, Copy)]
pub struct RankedNeighbor<'a> {
    pub point: &'a DataPoint,
    pub distance: f64,
}

/// Non-finite distances rank as maximally far; equal distances keep their
/// relative input order under the stable sort.
fn distance_order(first: f64, second: f64) -> Ordering {
    match (first.is_finite(), second.is_finite()) {
        (true, true) => first.partial_cmp(&second).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Ranks every pool member other than the query itself by ascending distance.
/// Self-exclusion is by index identity: after masking, two distinct points may
/// carry identical feature vectors and both stay candidates.
pub fn rank_neighbors<'a>(query: &DataPoint, pool: &'a Dataset) -> Vec<RankedNeighbor<'a>> {
    let mut neighbors: Vec<RankedNeighbor<'a>> = pool
        .points()
        .iter()
        .filter(|candidate| candidate.index != query.index)
        .map(|candidate| RankedNeighbor {
            point: candidate,
            distance: euclidean_distance(&query.features, &candidate.features, DIMENSIONS),
        })
        .collect();

    neighbors.sort_by(|first, second| distance_order(first.distance, second.distance));

    neighbors
}
