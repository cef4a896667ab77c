//! Constructive heuristics seeding the batching pipeline.
//!
//! - [`SavingsRanking`] — Pairwise savings ranking (Clarke & Wright, 1964), O(L² log L)
//! - [`build_order_route`] — Savings-guided merge of an order's pick locations into one route

mod route;
mod savings;

pub use route::build_order_route;
pub use savings::{Saving, SavingsRanking};
