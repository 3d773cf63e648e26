//! Distance abstraction for TSP instances.
//!
//! - [`DistanceProvider`] — read-only pairwise-distance capability the
//!   solver depends on
//! - [`DistanceMatrix`] — dense n×n implementation with Euclidean
//!   construction from coordinates

mod matrix;
mod provider;

pub use matrix::{DistanceMatrix, MIN_EDGE_WEIGHT};
pub use provider::DistanceProvider;
