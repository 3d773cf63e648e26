//! Ant Colony System engine.
//!
//! - [`PheromoneField`] — shared per-edge pheromone intensities
//! - [`AcsParams`] — hyperparameters (α, β, Q, ρ, neighborhood, seed)
//! - [`Colony`] — the iterative construct/evaporate/deposit loop
//! - [`AcsOutcome`] / [`Termination`] — run results

mod colony;
mod params;
mod pheromone;

pub use colony::{AcsOutcome, Colony, Termination};
pub use params::AcsParams;
pub use pheromone::PheromoneField;
