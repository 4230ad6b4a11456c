use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::neighbors::RankedNeighbor;

/// A voting policy over a ranked neighbor list. Returns `None` only when the
/// list is empty. Non-finite distances are maximally far and never consulted;
/// since the list is ranked they occupy a suffix, so voting stops at the
/// first one.
pub trait VoteRule {
    fn vote<'a>(&self, neighbors: &[RankedNeighbor<'a>], k: usize) -> Option<&'a str>;
}

/// Unweighted majority vote over the k nearest neighbors.
///
/// The winner starts as the nearest neighbor's label and changes only when a
/// tally strictly exceeds the running maximum at the moment it is incremented,
/// so the label that first reaches each new maximum wins and end-state ties
/// keep the earlier leader. `k = 0` falls back to the nearest neighbor's
/// label.
pub struct MajorityVote;

impl VoteRule for MajorityVote {
    fn vote<'a>(&self, neighbors: &[RankedNeighbor<'a>], k: usize) -> Option<&'a str> {
        let mut winner = neighbors.first()?.point.label.as_str();
        let mut highest = 0_usize;
        let mut tallies: HashMap<&str, usize> = HashMap::with_capacity(k);

        for neighbor in neighbors.iter().take(k) {
            if !neighbor.distance.is_finite() {
                break;
            }

            let label = neighbor.point.label.as_str();
            let tally = tallies.entry(label).or_insert(0);
            *tally += 1;

            if *tally > highest {
                highest = *tally;
                winner = label;
            }
        }

        Some(winner)
    }
}

/// Inverse-distance-weighted vote.
///
/// Deliberately examines only the k - 1 nearest neighbors, unlike
/// [`MajorityVote`]. A label's weight starts at 1.0 on first encounter and
/// accumulates 1/distance on repeats; the leader changes only on strictly
/// greater weight. A zero-distance neighbor is an exact duplicate of the
/// query and wins outright. `k <= 1` falls back to the nearest neighbor's
/// label.
pub struct WeightedVote;

impl VoteRule for WeightedVote {
    #[allow(clippy::float_cmp)]
    fn vote<'a>(&self, neighbors: &[RankedNeighbor<'a>], k: usize) -> Option<&'a str> {
        let mut winner = neighbors.first()?.point.label.as_str();
        let mut highest = 0.0_f64;
        let mut ratings: HashMap<&str, f64> = HashMap::new();

        for neighbor in neighbors.iter().take(k.saturating_sub(1)) {
            if !neighbor.distance.is_finite() {
                break;
            }

            let label = neighbor.point.label.as_str();

            if neighbor.distance == 0.0 {
                return Some(label);
            }

            match ratings.entry(label) {
                Entry::Occupied(mut entry) => {
                    let rating = entry.get_mut();
                    *rating += 1.0 / neighbor.distance;
                    if *rating > highest {
                        highest = *rating;
                        winner = label;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(1.0);
                }
            }
        }

        Some(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, DIMENSIONS};

    fn points(labels: &[&str]) -> Vec<DataPoint> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| DataPoint {
                index,
                features: [0.0; DIMENSIONS],
                label: (*label).to_string(),
            })
            .collect()
    }

    fn ranked<'a>(points: &'a [DataPoint], distances: &[f64]) -> Vec<RankedNeighbor<'a>> {
        points
            .iter()
            .zip(distances)
            .map(|(point, &distance)| RankedNeighbor { point, distance })
            .collect()
    }

    #[test]
    fn majority_picks_the_most_common_label() {
        let points = points(&["a", "b", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 3.0]);

        assert_eq!(MajorityVote.vote(&neighbors, 3), Some("b"));
    }

    #[test]
    fn majority_tie_keeps_the_earlier_leader() {
        let points = points(&["a", "b", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 3.0]);

        // one vote each, the nearest label stays the leader
        assert_eq!(MajorityVote.vote(&neighbors, 2), Some("a"));
    }

    #[test]
    fn majority_winner_is_the_first_to_reach_each_maximum() {
        let points = points(&["a", "b", "a", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 3.0, 4.0]);

        // "a" reaches two votes before "b" does; the end-state 2-2 tie keeps it
        assert_eq!(MajorityVote.vote(&neighbors, 4), Some("a"));
    }

    #[test]
    fn majority_with_k_zero_falls_back_to_the_nearest_label() {
        let points = points(&["a", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0]);

        assert_eq!(MajorityVote.vote(&neighbors, 0), Some("a"));
    }

    #[test]
    fn majority_ignores_non_finite_distances() {
        let points = points(&["a", "b", "b"]);
        let neighbors = ranked(&points, &[1.0, f64::INFINITY, f64::NAN]);

        assert_eq!(MajorityVote.vote(&neighbors, 3), Some("a"));
    }

    #[test]
    fn vote_on_an_empty_list_is_none() {
        assert!(MajorityVote.vote(&[], 3).is_none());
        assert!(WeightedVote.vote(&[], 3).is_none());
    }

    #[test]
    fn weighted_examines_only_k_minus_one_neighbors() {
        let points = points(&["a", "b", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 2.0]);

        // k = 3 sees only {a, b}: one encounter each, nearest label leads
        assert_eq!(WeightedVote.vote(&neighbors, 3), Some("a"));
        // k = 4 sees the second "b", whose accumulated weight takes the lead
        assert_eq!(WeightedVote.vote(&neighbors, 4), Some("b"));
    }

    #[test]
    fn weighted_leader_needs_strictly_greater_weight() {
        // "a" accumulates 1 + 1/2 = 1.5 first; "b" then reaches exactly 1.5
        // and must not displace it
        let points = points(&["a", "a", "b", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 2.0, 2.0]);

        assert_eq!(WeightedVote.vote(&neighbors, 5), Some("a"));
    }

    #[test]
    fn weighted_nearer_repeats_outweigh_more_distant_ones() {
        let points = points(&["b", "a", "a", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0, 4.0, 10.0]);

        // a: 1 + 1/4 = 1.25, b: 1 + 1/10 = 1.1
        assert_eq!(WeightedVote.vote(&neighbors, 5), Some("a"));
    }

    #[test]
    fn weighted_zero_distance_wins_outright() {
        let points = points(&["b", "a", "a"]);
        let neighbors = ranked(&points, &[0.0, 1.0, 1.0]);

        assert_eq!(WeightedVote.vote(&neighbors, 3), Some("b"));
    }

    #[test]
    fn weighted_identical_points_with_distinct_labels_return_a_defined_label() {
        let points = points(&["x", "y", "z"]);
        let neighbors = ranked(&points, &[0.0, 0.0, 0.0]);

        assert_eq!(WeightedVote.vote(&neighbors, 3), Some("x"));
    }

    #[test]
    fn weighted_with_k_at_most_one_falls_back_to_the_nearest_label() {
        let points = points(&["a", "b"]);
        let neighbors = ranked(&points, &[1.0, 2.0]);

        assert_eq!(WeightedVote.vote(&neighbors, 0), Some("a"));
        assert_eq!(WeightedVote.vote(&neighbors, 1), Some("a"));
    }
}
