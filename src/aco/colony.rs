//! Ant colony optimization loop.
//!
//! # Algorithm
//!
//! Each iteration runs one agent per node, every agent starting from a
//! distinct node. An agent builds a tour step by step: from its current
//! node it considers the k nearest unvisited nodes (the candidate set),
//! scores each as `pheromone(from, c)^α · (1/distance(from, c))^β`, and
//! picks one by roulette-wheel selection over the normalized scores. After
//! all agents finish, the shared pheromone field evaporates once, the best
//! tour record is updated, and **every** agent's tour deposits pheromone
//! proportional to its quality — not just the best one. All-ants
//! reinforcement converges more slowly than elitist best-only updates but
//! explores more broadly.
//!
//! # Reference
//!
//! Dorigo, M. & Gambardella, L.M. (1997). "Ant Colony System: a cooperative
//! learning approach to the traveling salesman problem", *IEEE Transactions
//! on Evolutionary Computation* 1(1), 53-66.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::DistanceProvider;
use crate::error::{AcsError, AcsResult};

use super::{AcsParams, PheromoneField};

/// Why a [`Colony::run`] loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The stagnation limit was reached: no agent produced a tour at least
    /// as short as the best for that many consecutive iterations.
    Converged,
    /// The iteration budget ran out.
    Exhausted,
}

/// Result of a [`Colony::run`] call.
///
/// Both termination reasons carry the same payload; they differ only in
/// why the loop stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcsOutcome {
    /// Best tour found, as a permutation of `0..n` (implicitly closed).
    pub tour: Vec<usize>,
    /// Length of the best tour.
    pub length: f64,
    /// Number of iterations actually executed.
    pub iterations: usize,
    /// Why the run stopped.
    pub termination: Termination,
}

/// An ant colony optimizing one TSP instance.
///
/// The colony owns the pheromone field and the random generator for its
/// whole run; distances come from a borrowed [`DistanceProvider`]. Within
/// one iteration all construction reads of the pheromone field happen
/// before the evaporation and deposit writes, so no agent observes a
/// partial update from its own generation.
///
/// # Examples
///
/// ```
/// use acs_tsp::aco::{AcsParams, Colony, Termination};
/// use acs_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_points(&[
///     (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0),
/// ]);
/// let params = AcsParams::for_instance(&dm)
///     .with_evaporation(0.1)
///     .with_neighborhood(3)
///     .with_seed(42);
///
/// let mut colony = Colony::new(&dm, params).unwrap();
/// let outcome = colony.run(50, 10).unwrap();
/// assert_eq!(outcome.tour.len(), 4);
/// assert!((outcome.length - 4.0).abs() < 1e-10); // the unit square
/// ```
#[derive(Debug)]
pub struct Colony<'a, P: DistanceProvider> {
    provider: &'a P,
    pheromone: PheromoneField,
    params: AcsParams,
    best_tour: Vec<usize>,
    best_length: f64,
    stagnation: usize,
    rng: StdRng,
}

impl<'a, P: DistanceProvider> Colony<'a, P> {
    /// Creates a colony for the given instance.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidArgument`] if the hyperparameters fail
    /// [`AcsParams::validate`] or the instance has no nodes.
    pub fn new(provider: &'a P, params: AcsParams) -> AcsResult<Self> {
        params.validate()?;
        let size = provider.size();
        let pheromone = PheromoneField::new(size, params.deposit, params.evaporation)?;
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            provider,
            pheromone,
            params,
            best_tour: Vec::new(),
            best_length: f64::INFINITY,
            stagnation: 0,
            rng,
        })
    }

    /// Seeds the best-known tour from a caller-supplied one, for warm
    /// starts or comparison baselines.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidIndex`] if the tour references a node out
    /// of range, or [`AcsError::InvalidArgument`] if it is not a full
    /// permutation of the instance's nodes.
    pub fn seed_tour(&mut self, tour: &[usize]) -> AcsResult<()> {
        let size = self.provider.size();
        if tour.len() != size {
            return Err(AcsError::InvalidArgument(format!(
                "starting tour must visit all {size} nodes, got {}",
                tour.len()
            )));
        }
        let mut seen = vec![false; size];
        for &node in tour {
            if node >= size {
                return Err(AcsError::InvalidIndex { index: node, size });
            }
            if seen[node] {
                return Err(AcsError::InvalidArgument(format!(
                    "starting tour visits node {node} twice"
                )));
            }
            seen[node] = true;
        }
        self.best_length = self.provider.path_length(tour)?;
        self.best_tour = tour.to_vec();
        Ok(())
    }

    /// Advances the optimization by exactly one generation of agents.
    ///
    /// One agent per node, each starting at its own node. After all agents
    /// finish: evaporate once, update the best record (evaluating agents in
    /// start-node order, a later equal-length tour displaces the stored
    /// one), adjust the stagnation counter, then deposit every agent's
    /// tour.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::DegenerateDistance`] if the provider hands the
    /// engine a zero distance between distinct nodes.
    pub fn step(&mut self) -> AcsResult<()> {
        let n = self.provider.size();
        let mut generation = Vec::with_capacity(n);
        for start in 0..n {
            let tour = self.construct_tour(start)?;
            let length = self.provider.path_length(&tour)?;
            generation.push((tour, length));
        }

        self.pheromone.evaporate();

        let mut improved = false;
        for (tour, length) in &generation {
            if *length <= self.best_length {
                self.best_tour.clone_from(tour);
                self.best_length = *length;
                improved = true;
            }
        }
        if improved {
            self.stagnation = 0;
        } else {
            self.stagnation += 1;
        }

        for (tour, length) in &generation {
            self.pheromone.deposit(tour, *length)?;
        }
        Ok(())
    }

    /// Runs up to `max_iterations` steps, stopping early once the
    /// stagnation counter reaches `stagnation_limit`.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Colony::step`].
    pub fn run(&mut self, max_iterations: usize, stagnation_limit: usize) -> AcsResult<AcsOutcome> {
        let mut iterations = 0;
        let mut termination = Termination::Exhausted;
        for i in 0..max_iterations {
            self.step()?;
            iterations = i + 1;
            debug!(
                iteration = i,
                best_length = self.best_length,
                stagnation = self.stagnation,
                "colony iteration"
            );
            if self.stagnation >= stagnation_limit {
                termination = Termination::Converged;
                break;
            }
        }
        Ok(AcsOutcome {
            tour: self.best_tour.clone(),
            length: self.best_length,
            iterations,
            termination,
        })
    }

    /// Best tour found so far, empty before the first improving step.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Length of the best tour found so far, `f64::INFINITY` before the
    /// first improving step.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// Iterations since the last improving-or-equal tour.
    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    /// The colony's pheromone field.
    pub fn pheromone(&self) -> &PheromoneField {
        &self.pheromone
    }

    /// Builds one agent's tour starting from `start`.
    fn construct_tour(&mut self, start: usize) -> AcsResult<Vec<usize>> {
        let n = self.provider.size();
        let mut tour = Vec::with_capacity(n);
        tour.push(start);
        let mut remaining: Vec<usize> = (0..n).filter(|&node| node != start).collect();

        let mut current = start;
        while !remaining.is_empty() {
            let candidates = self.candidate_set(current, &remaining);
            let next = self.select_next(current, &candidates)?;
            tour.push(next);
            remaining.retain(|&node| node != next);
            current = next;
        }
        Ok(tour)
    }

    /// The k nearest unvisited nodes from `from`, nearest first. Keeps all
    /// of them when fewer than k remain.
    fn candidate_set(&self, from: usize, remaining: &[usize]) -> Vec<usize> {
        let mut by_distance: Vec<(usize, f64)> = remaining
            .iter()
            .map(|&node| (node, self.provider.distance(from, node)))
            .collect();
        by_distance.sort_by(|a, b| {
            a.1.partial_cmp(&b.1).expect("distance should not be NaN")
        });
        by_distance.truncate(self.params.neighborhood);
        by_distance.into_iter().map(|(node, _)| node).collect()
    }

    /// Roulette-wheel selection over the candidates, weighted by
    /// `pheromone^α · (1/distance)^β`.
    fn select_next(&mut self, from: usize, candidates: &[usize]) -> AcsResult<usize> {
        let mut weights = Vec::with_capacity(candidates.len());
        let mut total = 0.0;
        for &candidate in candidates {
            let distance = self.provider.distance(from, candidate);
            if distance <= 0.0 {
                return Err(AcsError::DegenerateDistance {
                    from,
                    to: candidate,
                });
            }
            let weight = self.pheromone.get(from, candidate).powf(self.params.alpha)
                * (1.0 / distance).powf(self.params.beta);
            weights.push(weight);
            total += weight;
        }

        // All weights can underflow to zero once pheromone decays far
        // enough; fall back to the nearest candidate.
        if total <= 0.0 || !total.is_finite() {
            return Ok(candidates[0]);
        }

        let r: f64 = self.rng.random();
        let mut cumulative = 0.0;
        for (&candidate, &weight) in candidates.iter().zip(&weights) {
            cumulative += weight / total;
            if r <= cumulative {
                return Ok(candidate);
            }
        }
        // Rounding can leave the cumulative sum just below 1.0.
        Ok(candidates[candidates.len() - 1])
    }
}
