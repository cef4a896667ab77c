//! Error taxonomy for the batching pipeline.
//!
//! None of these errors are retried or recovered internally; any one of
//! them aborts the entire run.

use thiserror::Error;

/// Errors raised while loading data, batching orders, or scheduling pickers.
#[derive(Error, Debug)]
pub enum BatchingError {
    /// Malformed or inconsistent orders / coordinates data.
    #[error("invalid input: {0}")]
    Input(String),

    /// The picker pool must contain at least one picker.
    #[error("invalid configuration: picker count must be positive")]
    InvalidConfiguration,

    /// Cost evaluation was invoked on a batch with no orders, so no
    /// origin-to-first or last-to-origin leg exists.
    #[error("cannot evaluate the cost of an empty batch")]
    EmptyBatch,

    /// An order was rejected even by a freshly created batch. The batching
    /// policy has no rule for splitting an order, so this is unassignable.
    #[error(
        "order {order_id} ({item_count} items) exceeds the capacity of an empty batch ({capacity})"
    )]
    PolicyGap {
        /// The order that no batch would accept.
        order_id: usize,
        /// Number of items in the rejected order.
        item_count: usize,
        /// Item capacity of a batch.
        capacity: usize,
    },

    /// Underlying I/O failure while reading inputs or writing results.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BatchingError>;
