//! Parallel-machine scheduling of batches across pickers.

mod lpt;

pub use lpt::{schedule_batches, schedule_jobs};
