//! Colony hyperparameters.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceProvider;
use crate::error::{AcsError, AcsResult};

/// Hyperparameters for an ant colony run.
///
/// # Examples
///
/// ```
/// use acs_tsp::aco::AcsParams;
///
/// let params = AcsParams::default()
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation(0.1)
///     .with_neighborhood(5)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcsParams {
    /// Pheromone-influence exponent (α).
    pub alpha: f64,
    /// Heuristic-influence exponent (β).
    pub beta: f64,
    /// Deposit constant (Q); each tour deposits `Q / length` per edge.
    pub deposit: f64,
    /// Evaporation rate (ρ) in `[0, 1]`.
    pub evaporation: f64,
    /// Candidate-set size (k): how many nearest unvisited nodes an agent
    /// considers per step.
    pub neighborhood: usize,
    /// Seed for the colony's random generator. `None` seeds from the OS,
    /// which makes runs non-reproducible.
    pub seed: Option<u64>,
}

impl Default for AcsParams {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            deposit: 1.0,
            evaporation: 0.6,
            neighborhood: 20,
            seed: None,
        }
    }
}

impl AcsParams {
    /// Defaults with the deposit constant derived from the instance as
    /// `Q = n × max_edge_weight` — a heuristic that keeps per-edge deposits
    /// on the same scale as initial pheromone for typical tour lengths.
    pub fn for_instance<P: DistanceProvider>(provider: &P) -> Self {
        Self::default().with_deposit(provider.size() as f64 * provider.max_edge_weight())
    }

    /// Sets the pheromone-influence exponent (α).
    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic-influence exponent (β).
    #[must_use]
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the deposit constant (Q).
    #[must_use]
    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    /// Sets the evaporation rate (ρ).
    #[must_use]
    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    /// Sets the candidate-set size (k).
    #[must_use]
    pub fn with_neighborhood(mut self, neighborhood: usize) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Sets the random seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the hyperparameters.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidArgument`] if α or β is not finite and
    /// non-negative, Q is not finite and positive, ρ is outside `[0, 1]`,
    /// or the neighborhood size is zero.
    pub fn validate(&self) -> AcsResult<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcsError::InvalidArgument(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcsError::InvalidArgument(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(AcsError::InvalidArgument(format!(
                "deposit constant must be finite and positive, got {}",
                self.deposit
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(AcsError::InvalidArgument(format!(
                "evaporation rate must be in [0, 1], got {}",
                self.evaporation
            )));
        }
        if self.neighborhood == 0 {
            return Err(AcsError::InvalidArgument(
                "neighborhood size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    #[test]
    fn test_default_is_valid() {
        assert!(AcsParams::default().validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let params = AcsParams::default()
            .with_alpha(2.0)
            .with_beta(3.0)
            .with_deposit(50.0)
            .with_evaporation(0.2)
            .with_neighborhood(7)
            .with_seed(9);
        assert_eq!(params.alpha, 2.0);
        assert_eq!(params.beta, 3.0);
        assert_eq!(params.deposit, 50.0);
        assert_eq!(params.evaporation, 0.2);
        assert_eq!(params.neighborhood, 7);
        assert_eq!(params.seed, Some(9));
    }

    #[test]
    fn test_for_instance_deposit_convention() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)]);
        let params = AcsParams::for_instance(&dm);
        assert!((params.deposit - 3.0 * 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(AcsParams::default().with_alpha(-1.0).validate().is_err());
        assert!(AcsParams::default().with_alpha(f64::NAN).validate().is_err());
        assert!(AcsParams::default().with_beta(-0.5).validate().is_err());
        assert!(AcsParams::default().with_deposit(0.0).validate().is_err());
        assert!(AcsParams::default().with_evaporation(-0.1).validate().is_err());
        assert!(AcsParams::default().with_evaporation(1.5).validate().is_err());
        assert!(AcsParams::default().with_neighborhood(0).validate().is_err());
    }
}
