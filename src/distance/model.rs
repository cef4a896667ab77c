//! Combined pairwise and origin distance data.

use crate::distance::DistanceMatrix;
use crate::error::{BatchingError, Result};

/// Distance data for one run: an L×L pairwise matrix over pick locations
/// and the vector of origin-to-location costs, sharing one index space.
///
/// Both parts are immutable once the model is constructed.
///
/// # Examples
///
/// ```
/// use pickbatch::distance::DistanceModel;
///
/// // Origin at (0,0), two pick locations on the x axis.
/// let model = DistanceModel::from_points((0.0, 0.0), &[(2.0, 0.0), (5.0, 0.0)]);
/// assert_eq!(model.num_locations(), 2);
/// assert!((model.from_origin(0) - 2.0).abs() < 1e-10);
/// assert!((model.between(0, 1) - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceModel {
    matrix: DistanceMatrix,
    origin: Vec<f64>,
}

impl DistanceModel {
    const SYMMETRY_TOL: f64 = 1e-9;

    /// Creates a model from an explicit matrix and origin vector.
    ///
    /// Rejects mismatched dimensions, asymmetric matrices, and negative
    /// distances.
    pub fn new(matrix: DistanceMatrix, origin: Vec<f64>) -> Result<Self> {
        if origin.len() != matrix.size() {
            return Err(BatchingError::Input(format!(
                "origin vector has {} entries but the matrix covers {} locations",
                origin.len(),
                matrix.size()
            )));
        }
        if !matrix.is_symmetric(Self::SYMMETRY_TOL) {
            return Err(BatchingError::Input(
                "distance matrix is not symmetric".into(),
            ));
        }
        if !matrix.is_non_negative() || origin.iter().any(|&d| d < 0.0) {
            return Err(BatchingError::Input(
                "distances must be non-negative".into(),
            ));
        }
        Ok(Self { matrix, origin })
    }

    /// Builds a Euclidean model from the origin coordinate and the pick
    /// location coordinates, indexed 0..L−1 in the given order.
    pub fn from_points(origin: (f64, f64), locations: &[(f64, f64)]) -> Self {
        let matrix = DistanceMatrix::from_points(locations);
        let from_origin = locations
            .iter()
            .map(|&(x, y)| {
                let dx = x - origin.0;
                let dy = y - origin.1;
                (dx * dx + dy * dy).sqrt()
            })
            .collect();
        Self {
            matrix,
            origin: from_origin,
        }
    }

    /// Number of pick locations (excluding the origin).
    pub fn num_locations(&self) -> usize {
        self.origin.len()
    }

    /// Distance between two pick locations.
    pub fn between(&self, from: usize, to: usize) -> f64 {
        self.matrix.get(from, to)
    }

    /// Distance from the origin to a pick location.
    pub fn from_origin(&self, location: usize) -> f64 {
        self.origin[location]
    }

    /// The pairwise matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}
