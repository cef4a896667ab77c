//! Domain model types for order batching and picker scheduling.
//!
//! Provides the core abstractions: item records tying orders to pick
//! locations, orders with their constructed pick routes, capacity-bounded
//! batches, and the per-picker schedule produced at the end of a run.

mod batch;
mod item;
mod order;
mod schedule;

pub use batch::Batch;
pub use item::Item;
pub use order::Order;
pub use schedule::{Schedule, ScheduledBatch};
