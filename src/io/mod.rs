//! File interfaces: input parsing and result persistence.

mod coordinates;
mod orders;
mod report;

pub use coordinates::{parse_coordinates, read_coordinates_file};
pub use orders::{parse_orders, read_orders_file};
pub use report::{append_run_history, write_result_file, RunRecord};
