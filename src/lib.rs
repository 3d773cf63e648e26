//! # acs-tsp
//!
//! Ant Colony System solver for the symmetric Traveling Salesman Problem,
//! with TSPLIB benchmark instance support and a greedy baseline heuristic.
//!
//! ## Modules
//!
//! - [`aco`] — The colony engine (pheromone field, construction loop, run loop)
//! - [`distance`] — Distance provider trait and dense matrix implementation
//! - [`tsplib`] — TSPLIB EUC_2D instance and reference tour parsers
//! - [`constructive`] — Greedy nearest-neighbor baseline
//! - [`error`] — Crate-wide error type
//!
//! ## Example
//!
//! ```
//! use acs_tsp::aco::{AcsParams, Colony};
//! use acs_tsp::distance::DistanceMatrix;
//!
//! let dm = DistanceMatrix::from_points(&[
//!     (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0),
//! ]);
//! let params = AcsParams::for_instance(&dm)
//!     .with_evaporation(0.1)
//!     .with_neighborhood(3)
//!     .with_seed(42);
//! let mut colony = Colony::new(&dm, params)?;
//! let outcome = colony.run(100, 25)?;
//! assert_eq!(outcome.tour.len(), 4);
//! # Ok::<(), acs_tsp::error::AcsError>(())
//! ```

pub mod aco;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod tsplib;
