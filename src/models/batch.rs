//! Batch type with capacity-gated assignment.

use crate::distance::DistanceModel;
use crate::models::Order;

/// A group of orders picked together on one combined walk.
///
/// Holds the assigned order ids and a parallel vector of reversal flags;
/// the two are always the same length and append-only. An order, once
/// placed, is never removed, reordered, or moved to another batch.
///
/// # Examples
///
/// ```
/// use pickbatch::distance::DistanceModel;
/// use pickbatch::models::{Batch, Item, Order};
///
/// let distances = DistanceModel::from_points((0.0, 0.0), &[(1.0, 0.0), (2.0, 0.0)]);
/// let order = Order::new(0, vec![Item::new(0, 0)], vec![0]);
///
/// let mut batch = Batch::new(0, 4);
/// assert!(batch.assign(&order, &distances));
/// assert_eq!(batch.orders(), &[0]);
/// assert_eq!(batch.is_order_reversed(), &[false]);
/// ```
#[derive(Debug, Clone)]
pub struct Batch {
    id: usize,
    capacity: usize,
    orders: Vec<usize>,
    is_order_reversed: Vec<bool>,
    item_count: usize,
    tail: Option<usize>,
}

impl Batch {
    /// Creates an empty batch with the given sequential id and item
    /// capacity.
    pub fn new(id: usize, capacity: usize) -> Self {
        Self {
            id,
            capacity,
            orders: Vec::new(),
            is_order_reversed: Vec::new(),
            item_count: 0,
            tail: None,
        }
    }

    /// Offers an order to this batch.
    ///
    /// Accepts iff the order's items still fit within the item capacity.
    /// On acceptance the order id is appended together with a reversal
    /// flag: the incoming route is flipped when its far end is the cheaper
    /// connection — to the origin for the first order, to the current tail
    /// location for later ones. On rejection the batch is left unchanged.
    pub fn assign(&mut self, order: &Order, distances: &DistanceModel) -> bool {
        if self.item_count + order.num_items() > self.capacity {
            return false;
        }
        let route = order.route();
        let (first, last) = match (route.first(), route.last()) {
            (Some(&f), Some(&l)) => (f, l),
            _ => return false,
        };

        let reverse = match self.tail {
            None => distances.from_origin(last) < distances.from_origin(first),
            Some(tail) => distances.between(tail, last) < distances.between(tail, first),
        };

        self.orders.push(order.id());
        self.is_order_reversed.push(reverse);
        self.item_count += order.num_items();
        self.tail = Some(if reverse { first } else { last });
        true
    }

    /// The batch's sequential id assigned at creation.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Item capacity of this batch.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Assigned order ids, in assignment order.
    pub fn orders(&self) -> &[usize] {
        &self.orders
    }

    /// Reversal flags, parallel to [`Self::orders`].
    pub fn is_order_reversed(&self) -> &[bool] {
        &self.is_order_reversed
    }

    /// Total items currently held.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns `true` if no order has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
