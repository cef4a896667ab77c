//! Pairwise savings ranking.
//!
//! # Algorithm
//!
//! The savings measure (Clarke & Wright, 1964) scores how much travel is
//! saved by visiting locations i and j on one walk instead of two separate
//! out-and-back walks from the origin:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! The ranking over all location pairs seeds route construction: pairs with
//! higher savings are merged first.
//!
//! # Complexity
//!
//! O(L² log L) time, O(L²) space where L = number of locations (dominated
//! by sorting).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::distance::DistanceModel;

/// A savings value for visiting two locations on one walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Lower location index of the pair.
    pub i: usize,
    /// Higher location index of the pair.
    pub j: usize,
    /// Travel saved by merging, `origin[i] + origin[j] − d(i, j)`.
    pub value: f64,
}

/// All location pairs, ranked by descending savings value.
///
/// Ordering contract: entries are sorted by value descending; equal values
/// keep their enumeration order (i ascending, then j ascending). The full
/// ranking for L locations has exactly L·(L−1)/2 entries. Every route
/// construction call of a run must receive the same ranking, unmodified,
/// so all orders are built against one consistent preference order.
///
/// # Examples
///
/// ```
/// use pickbatch::distance::{DistanceMatrix, DistanceModel};
/// use pickbatch::constructive::SavingsRanking;
///
/// let matrix = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
/// let model = DistanceModel::new(matrix, vec![2.0, 3.0]).expect("valid");
///
/// let ranking = SavingsRanking::compute(&model);
/// assert_eq!(ranking.len(), 1);
/// assert_eq!(ranking.entries()[0].value, 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SavingsRanking {
    entries: Vec<Saving>,
}

impl SavingsRanking {
    /// Computes the ranking over every location pair of the model.
    pub fn compute(distances: &DistanceModel) -> Self {
        let n = distances.num_locations();
        let mut entries = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let value =
                    distances.from_origin(i) + distances.from_origin(j) - distances.between(i, j);
                entries.push(Saving { i, j, value });
            }
        }
        // Stable sort: equal savings keep (i, j) enumeration order.
        entries.sort_by(|a, b| {
            b.value
                .partial_cmp(&a.value)
                .expect("savings should not be NaN")
        });
        Self { entries }
    }

    /// The ranked entries, best savings first.
    pub fn entries(&self) -> &[Saving] {
        &self.entries
    }

    /// Number of ranked pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the model had fewer than two locations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn model(size: usize, data: Vec<f64>, origin: Vec<f64>) -> DistanceModel {
        let matrix = DistanceMatrix::from_data(size, data).expect("square data");
        DistanceModel::new(matrix, origin).expect("valid model")
    }

    #[test]
    fn test_savings_value() {
        // s(0, 1) = 2 + 3 - 4 = 1
        let m = model(2, vec![0.0, 4.0, 4.0, 0.0], vec![2.0, 3.0]);
        let ranking = SavingsRanking::compute(&m);
        assert_eq!(ranking.len(), 1);
        let s = ranking.entries()[0];
        assert_eq!((s.i, s.j), (0, 1));
        assert!((s.value - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_full_pair_count() {
        for n in [2usize, 3, 5, 8] {
            let m = model(n, vec![0.0; n * n], vec![1.0; n]);
            let ranking = SavingsRanking::compute(&m);
            assert_eq!(ranking.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_sorted_non_increasing() {
        let m = model(
            3,
            vec![0.0, 1.0, 5.0, 1.0, 0.0, 2.0, 5.0, 2.0, 0.0],
            vec![3.0, 4.0, 2.0],
        );
        let ranking = SavingsRanking::compute(&m);
        for pair in ranking.entries().windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn test_ties_keep_enumeration_order() {
        // Zero matrix and equal origin legs make every saving identical,
        // so the ranking must be exactly the enumeration order.
        let m = model(4, vec![0.0; 16], vec![1.0; 4]);
        let ranking = SavingsRanking::compute(&m);
        let pairs: Vec<(usize, usize)> = ranking.entries().iter().map(|s| (s.i, s.j)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_negative_savings_are_kept() {
        // d(0, 1) larger than both origin legs combined.
        let m = model(2, vec![0.0, 9.0, 9.0, 0.0], vec![1.0, 2.0]);
        let ranking = SavingsRanking::compute(&m);
        assert_eq!(ranking.len(), 1);
        assert!(ranking.entries()[0].value < 0.0);
    }

    #[test]
    fn test_single_location_empty_ranking() {
        let m = model(1, vec![0.0], vec![5.0]);
        let ranking = SavingsRanking::compute(&m);
        assert!(ranking.is_empty());
    }
}
