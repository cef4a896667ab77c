//! Savings-guided route construction for a single order.
//!
//! # Algorithm
//!
//! Each distinct pick location of the order starts as its own segment.
//! Walking the global savings ranking in order, two segments are merged
//! whenever the ranked pair's endpoints are exposed segment ends, reversing
//! segments as needed so the endpoints join. Remaining segments are
//! concatenated in first-touched order.
//!
//! This is the Clarke-Wright merge step restricted to one order's
//! locations, with no capacity term: an order is always picked in a single
//! walk, so the ranking only decides the visiting sequence.
//!
//! # Complexity
//!
//! O(S + k²) where S = ranking size and k = the order's distinct locations.

use std::collections::HashMap;

use crate::constructive::SavingsRanking;
use crate::models::Item;

/// Builds the visiting sequence over an order's distinct item locations.
///
/// The result is a permutation of those locations: no repeats, no
/// omissions. Orders with zero or one distinct location trivially map to
/// an empty or single-stop route.
///
/// # Examples
///
/// ```
/// use pickbatch::constructive::{build_order_route, SavingsRanking};
/// use pickbatch::distance::DistanceModel;
/// use pickbatch::models::Item;
///
/// let model = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0)]);
/// let ranking = SavingsRanking::compute(&model);
///
/// let items = vec![Item::new(0, 1), Item::new(0, 0)];
/// let route = build_order_route(&items, &ranking);
/// assert_eq!(route.len(), 2);
/// ```
pub fn build_order_route(items: &[Item], ranking: &SavingsRanking) -> Vec<usize> {
    // Distinct locations, first-touched order.
    let mut locations = Vec::new();
    let mut segment_of: HashMap<usize, usize> = HashMap::new();
    for item in items {
        if !segment_of.contains_key(&item.location) {
            segment_of.insert(item.location, locations.len());
            locations.push(item.location);
        }
    }
    if locations.len() <= 1 {
        return locations;
    }

    let mut segments: Vec<Vec<usize>> = locations.iter().map(|&loc| vec![loc]).collect();

    for saving in ranking.entries() {
        let (Some(&si), Some(&sj)) = (segment_of.get(&saving.i), segment_of.get(&saving.j)) else {
            continue;
        };
        if si == sj {
            continue;
        }

        // The pair can only join where both endpoints are exposed.
        let i_at_end = segments[si].last() == Some(&saving.i);
        let i_at_start = segments[si].first() == Some(&saving.i);
        let j_at_start = segments[sj].first() == Some(&saving.j);
        let j_at_end = segments[sj].last() == Some(&saving.j);

        let (merge_from, merge_into, reverse_from, reverse_into) = if i_at_end && j_at_start {
            (sj, si, false, false)
        } else if j_at_end && i_at_start {
            (si, sj, false, false)
        } else if i_at_end && j_at_end {
            (sj, si, true, false)
        } else if i_at_start && j_at_start {
            (sj, si, false, true)
        } else {
            continue;
        };

        let mut from_segment = std::mem::take(&mut segments[merge_from]);
        if reverse_from {
            from_segment.reverse();
        }
        if reverse_into {
            segments[merge_into].reverse();
        }
        segments[merge_into].append(&mut from_segment);

        for &loc in &segments[merge_into] {
            segment_of.insert(loc, merge_into);
        }
    }

    let mut route = Vec::with_capacity(locations.len());
    for segment in &segments {
        route.extend_from_slice(segment);
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{DistanceMatrix, DistanceModel};

    fn ranking_from(size: usize, data: Vec<f64>, origin: Vec<f64>) -> SavingsRanking {
        let matrix = DistanceMatrix::from_data(size, data).expect("square data");
        let model = DistanceModel::new(matrix, origin).expect("valid model");
        SavingsRanking::compute(&model)
    }

    fn items_at(locations: &[usize]) -> Vec<Item> {
        locations.iter().map(|&loc| Item::new(0, loc)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        let ranking = ranking_from(2, vec![0.0; 4], vec![1.0, 1.0]);
        assert!(build_order_route(&[], &ranking).is_empty());
        assert_eq!(build_order_route(&items_at(&[1]), &ranking), vec![1]);
    }

    #[test]
    fn test_repeated_locations_collapse() {
        let ranking = ranking_from(2, vec![0.0; 4], vec![1.0, 1.0]);
        let route = build_order_route(&items_at(&[1, 1, 1]), &ranking);
        assert_eq!(route, vec![1]);
    }

    #[test]
    fn test_chain_merge_follows_ranking() {
        // Line: d(0,1)=1, d(1,2)=1, d(0,2)=2; origin legs 1, 2, 3.
        // Savings: (1,2)=4, (0,1)=2, (0,2)=2 — merge (1,2) first, then
        // prepend 0 via (0,1).
        let ranking = ranking_from(
            3,
            vec![0.0, 1.0, 2.0, 1.0, 0.0, 1.0, 2.0, 1.0, 0.0],
            vec![1.0, 2.0, 3.0],
        );
        let route = build_order_route(&items_at(&[0, 1, 2]), &ranking);
        assert_eq!(route, vec![0, 1, 2]);
    }

    #[test]
    fn test_end_to_end_merge_reverses_segment() {
        // Equal origin legs (10 each) make savings rank by pairwise
        // distance alone: (0,1) then (2,3) then (1,3).
        let mut data = vec![9.0; 16];
        for k in 0..4 {
            data[k * 4 + k] = 0.0;
        }
        let mut set = |a: usize, b: usize, d: f64| {
            data[a * 4 + b] = d;
            data[b * 4 + a] = d;
        };
        set(0, 1, 1.0);
        set(2, 3, 2.0);
        set(1, 3, 3.0);
        let ranking = ranking_from(4, data, vec![10.0; 4]);

        // [0,1] and [2,3] form, then join end-to-end: 1 meets 3, so the
        // second segment flips.
        let route = build_order_route(&items_at(&[0, 1, 2, 3]), &ranking);
        assert_eq!(route, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_route_is_permutation_of_locations() {
        let ranking = ranking_from(
            5,
            {
                let mut data = vec![4.0; 25];
                for k in 0..5 {
                    data[k * 5 + k] = 0.0;
                }
                data
            },
            vec![2.0, 7.0, 1.0, 5.0, 3.0],
        );
        let route = build_order_route(&items_at(&[4, 2, 0, 3]), &ranking);
        let mut sorted = route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 2, 3, 4]);
    }

    #[test]
    fn test_ignores_locations_outside_order() {
        // Ranking over 4 locations, but the order only touches 2.
        let ranking = ranking_from(4, vec![0.0; 16], vec![1.0; 4]);
        let route = build_order_route(&items_at(&[3, 1]), &ranking);
        let mut sorted = route.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 3]);
    }
}
