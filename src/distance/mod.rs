//! Distance data shared by every component of a run.
//!
//! Provides a dense pairwise matrix over pick locations and the
//! origin-distance vector that together define one location index space.

mod matrix;
mod model;

pub use matrix::DistanceMatrix;
pub use model::DistanceModel;
