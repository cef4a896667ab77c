//! Walk cost evaluation for routes and batches.

use crate::distance::{DistanceMatrix, DistanceModel};
use crate::error::{BatchingError, Result};
use crate::models::{Batch, Order};

/// Travel cost of visiting `route` in sequence.
///
/// Sums the internal legs only — origin legs are the caller's concern.
/// Routes of length ≤ 1 cost nothing.
///
/// # Examples
///
/// ```
/// use pickbatch::distance::DistanceMatrix;
/// use pickbatch::evaluation::route_cost;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
/// assert_eq!(route_cost(&[0, 1], &dm), 4.0);
/// assert_eq!(route_cost(&[0], &dm), 0.0);
/// assert_eq!(route_cost(&[], &dm), 0.0);
/// ```
pub fn route_cost(route: &[usize], distances: &DistanceMatrix) -> f64 {
    route
        .windows(2)
        .map(|leg| distances.get(leg[0], leg[1]))
        .sum()
}

/// Evaluates batch walk costs against a run's order registry and distance
/// model.
pub struct BatchCostEvaluator<'a> {
    orders: &'a [Order],
    distances: &'a DistanceModel,
}

impl<'a> BatchCostEvaluator<'a> {
    /// Creates a new evaluator over the frozen order registry.
    pub fn new(orders: &'a [Order], distances: &'a DistanceModel) -> Self {
        Self { orders, distances }
    }

    /// Cost of walking the given orders as one batch: the origin leg in,
    /// every internal leg of the concatenated routes, and the origin leg
    /// back out.
    ///
    /// `reversed` defaults to all-false when `None`; otherwise it must
    /// match `order_ids` in length. A flagged order is traversed
    /// back-to-front on a private copy — its stored route is never
    /// mutated.
    ///
    /// # Errors
    ///
    /// [`BatchingError::EmptyBatch`] when `order_ids` is empty (no
    /// first/last location exists), [`BatchingError::Input`] on a flag
    /// length mismatch or an unknown order id.
    pub fn batch_cost(&self, order_ids: &[usize], reversed: Option<&[bool]>) -> Result<f64> {
        if order_ids.is_empty() {
            return Err(BatchingError::EmptyBatch);
        }
        if let Some(flags) = reversed {
            if flags.len() != order_ids.len() {
                return Err(BatchingError::Input(format!(
                    "{} reversal flags for {} orders",
                    flags.len(),
                    order_ids.len()
                )));
            }
        }

        let mut walk = Vec::new();
        for (k, &order_id) in order_ids.iter().enumerate() {
            let order = self.orders.get(order_id).ok_or_else(|| {
                BatchingError::Input(format!("batch references unknown order id {order_id}"))
            })?;
            if reversed.is_some_and(|flags| flags[k]) {
                walk.extend(order.route().iter().rev().copied());
            } else {
                walk.extend_from_slice(order.route());
            }
        }

        let (first, last) = match (walk.first(), walk.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return Err(BatchingError::EmptyBatch),
        };
        Ok(self.distances.from_origin(first)
            + route_cost(&walk, self.distances.matrix())
            + self.distances.from_origin(last))
    }

    /// Cost of a batch using its stored orders and reversal flags.
    pub fn cost_of(&self, batch: &Batch) -> Result<f64> {
        self.batch_cost(batch.orders(), Some(batch.is_order_reversed()))
    }
}
