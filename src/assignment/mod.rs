//! Greedy first-fit batch assignment.
//!
//! # Algorithm
//!
//! Orders are offered strictly in the given sequence — the assigner does
//! no reordering or prioritization of its own. Each order is tried against
//! every existing batch in creation order and the first batch that accepts
//! it wins. When none accepts, a new batch with the next sequential id is
//! opened and the order is assigned to it. There is no backtracking: an
//! order assigned early is never reconsidered when later batches open.
//!
//! This is first-fit bin packing (not best-fit, not most-loaded-first);
//! the resulting batching is deliberately greedy and non-optimal.
//!
//! # Complexity
//!
//! O(n·b) feasibility checks for n orders and b final batches.
//!
//! # Reference
//!
//! Johnson, D.S. (1973). "Near-Optimal Bin Packing Algorithms", MIT.

use crate::distance::DistanceModel;
use crate::error::{BatchingError, Result};
use crate::models::{Batch, Order};

/// Packs the given orders into batches, growing `batches` in place.
///
/// Callers pass `order_ids` in ascending id order; every id must resolve
/// in the `orders` registry. On success every input order sits in exactly
/// one batch and batch ids increase strictly in creation order.
///
/// # Errors
///
/// [`BatchingError::PolicyGap`] when an order is rejected even by a
/// freshly created batch — the policy has no rule for splitting an order,
/// so the run cannot continue. [`BatchingError::Input`] on an unknown
/// order id.
///
/// # Examples
///
/// ```
/// use pickbatch::assignment::assign_orders;
/// use pickbatch::distance::DistanceModel;
/// use pickbatch::models::{Item, Order};
///
/// let distances = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0)]);
/// let orders = vec![
///     Order::new(0, vec![Item::new(0, 0)], vec![0]),
///     Order::new(1, vec![Item::new(1, 1)], vec![1]),
/// ];
///
/// let mut batches = Vec::new();
/// assign_orders(&[0, 1], &orders, &mut batches, 2, &distances).expect("orders fit");
/// assert_eq!(batches.len(), 1);
/// assert_eq!(batches[0].orders(), &[0, 1]);
/// ```
pub fn assign_orders(
    order_ids: &[usize],
    orders: &[Order],
    batches: &mut Vec<Batch>,
    capacity: usize,
    distances: &DistanceModel,
) -> Result<()> {
    for &order_id in order_ids {
        let order = orders.get(order_id).ok_or_else(|| {
            BatchingError::Input(format!("assignment references unknown order id {order_id}"))
        })?;

        let mut assigned = false;
        for batch in batches.iter_mut() {
            if batch.assign(order, distances) {
                assigned = true;
                break;
            }
        }

        if !assigned {
            let mut fresh = Batch::new(batches.len(), capacity);
            if !fresh.assign(order, distances) {
                return Err(BatchingError::PolicyGap {
                    order_id,
                    item_count: order.num_items(),
                    capacity,
                });
            }
            batches.push(fresh);
        }
    }
    Ok(())
}
