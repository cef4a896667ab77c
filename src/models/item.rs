//! Item record type.

use serde::{Deserialize, Serialize};

/// A single pick line of a customer order: one item at one location.
///
/// # Examples
///
/// ```
/// use pickbatch::models::Item;
///
/// let item = Item::new(0, 4);
/// assert_eq!(item.order_id, 0);
/// assert_eq!(item.location, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// The order this item belongs to (dense ids, 0..N−1).
    pub order_id: usize,
    /// Pick location index into the run's distance model.
    pub location: usize,
}

impl Item {
    /// Creates an item record.
    pub fn new(order_id: usize, location: usize) -> Self {
        Self { order_id, location }
    }
}
