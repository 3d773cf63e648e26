//! Constructive baseline heuristics.
//!
//! - [`nearest_neighbor`] — Greedy nearest-neighbor tour from every start
//!   node, O(n³) total

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor;
