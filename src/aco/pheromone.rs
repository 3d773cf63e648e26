//! Pheromone intensity matrix.

use crate::error::{AcsError, AcsResult};

/// A dense n×n matrix of pheromone intensities on directed edges.
///
/// Every entry starts at 1.0. Each iteration evaporates all entries by a
/// fixed rate and deposits `Q / tour_length` along every edge of every
/// completed tour, so good tours accumulate intensity faster than it
/// decays. Entries never go negative for an evaporation rate in `[0, 1]`.
///
/// A dense matrix is deliberate: benchmark TSP sizes keep O(n²) storage
/// cheap, and `get` sits in the construction inner loop where indexed
/// access matters.
///
/// # Examples
///
/// ```
/// use acs_tsp::aco::PheromoneField;
///
/// let mut field = PheromoneField::new(3, 10.0, 0.5).unwrap();
/// assert_eq!(field.get(0, 1), 1.0);
///
/// field.evaporate();
/// assert_eq!(field.get(0, 1), 0.5);
///
/// field.deposit(&[0, 1, 2], 5.0).unwrap();
/// assert_eq!(field.get(0, 1), 2.5); // 0.5 + 10.0 / 5.0
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneField {
    data: Vec<f64>,
    size: usize,
    deposit_constant: f64,
    evaporation: f64,
}

impl PheromoneField {
    /// Creates a pheromone field with every entry at 1.0.
    ///
    /// `deposit_constant` (Q) scales each deposit; `evaporation` (ρ) is the
    /// per-iteration decay rate.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidArgument`] if `size == 0` or `evaporation`
    /// is not in `[0, 1]`.
    pub fn new(size: usize, deposit_constant: f64, evaporation: f64) -> AcsResult<Self> {
        if size == 0 {
            return Err(AcsError::InvalidArgument(
                "pheromone field size must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&evaporation) {
            return Err(AcsError::InvalidArgument(format!(
                "evaporation rate must be in [0, 1], got {evaporation}"
            )));
        }
        Ok(Self {
            data: vec![1.0; size * size],
            size,
            deposit_constant,
            evaporation,
        })
    }

    /// Adds `Q / tour_length` to every directed edge of the tour, including
    /// the closing edge from the last node back to the first.
    ///
    /// `tour_length` must be positive; callers guarantee non-degenerate
    /// tours, so a zero length is a programming error rather than a
    /// recoverable condition.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidIndex`] if any tour entry is out of
    /// range. The matrix is validated before any entry is mutated.
    pub fn deposit(&mut self, tour: &[usize], tour_length: f64) -> AcsResult<()> {
        debug_assert!(tour_length > 0.0, "tour length must be positive");
        for &node in tour {
            if node >= self.size {
                return Err(AcsError::InvalidIndex {
                    index: node,
                    size: self.size,
                });
            }
        }
        if tour.is_empty() {
            return Ok(());
        }
        let delta = self.deposit_constant / tour_length;
        for pair in tour.windows(2) {
            self.data[pair[0] * self.size + pair[1]] += delta;
        }
        // closing the cycle
        self.data[tour[tour.len() - 1] * self.size + tour[0]] += delta;
        Ok(())
    }

    /// Multiplies every entry by `(1 - ρ)`.
    pub fn evaporate(&mut self) {
        let keep = 1.0 - self.evaporation;
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Current intensity on the directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes the field covers.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_initialized_to_one() {
        let field = PheromoneField::new(3, 1.0, 0.5).expect("valid");
        for from in 0..3 {
            for to in 0..3 {
                assert_eq!(field.get(from, to), 1.0);
            }
        }
    }

    #[test]
    fn test_new_zero_size() {
        let err = PheromoneField::new(0, 1.0, 0.5).expect_err("zero size");
        assert!(matches!(err, AcsError::InvalidArgument(_)));
    }

    #[test]
    fn test_new_bad_evaporation() {
        assert!(PheromoneField::new(3, 1.0, -0.1).is_err());
        assert!(PheromoneField::new(3, 1.0, 1.1).is_err());
        assert!(PheromoneField::new(3, 1.0, 0.0).is_ok());
        assert!(PheromoneField::new(3, 1.0, 1.0).is_ok());
    }

    #[test]
    fn test_evaporate_decay_law() {
        let mut field = PheromoneField::new(2, 1.0, 0.25).expect("valid");
        for _ in 0..3 {
            field.evaporate();
        }
        let expected = 0.75f64.powi(3);
        assert!((field.get(0, 1) - expected).abs() < 1e-12);
        assert!(field.get(0, 1) >= 0.0);
    }

    #[test]
    fn test_evaporate_full_rate_hits_zero() {
        let mut field = PheromoneField::new(2, 1.0, 1.0).expect("valid");
        field.evaporate();
        assert_eq!(field.get(0, 1), 0.0);
        assert_eq!(field.get(1, 0), 0.0);
    }

    #[test]
    fn test_deposit_adds_on_tour_edges_only() {
        let mut field = PheromoneField::new(4, 8.0, 0.5).expect("valid");
        field.deposit(&[0, 2, 1, 3], 4.0).expect("valid tour");
        let delta = 8.0 / 4.0;
        // directed edges of the tour, closing edge included
        assert_eq!(field.get(0, 2), 1.0 + delta);
        assert_eq!(field.get(2, 1), 1.0 + delta);
        assert_eq!(field.get(1, 3), 1.0 + delta);
        assert_eq!(field.get(3, 0), 1.0 + delta);
        // reverse direction and unrelated edges untouched
        assert_eq!(field.get(2, 0), 1.0);
        assert_eq!(field.get(0, 1), 1.0);
        assert_eq!(field.get(3, 2), 1.0);
    }

    #[test]
    fn test_deposit_invalid_index_leaves_matrix_unchanged() {
        let mut field = PheromoneField::new(3, 6.0, 0.5).expect("valid");
        let err = field.deposit(&[0, 1, 7], 3.0).expect_err("out of range");
        assert!(matches!(err, AcsError::InvalidIndex { index: 7, size: 3 }));
        assert_eq!(field.get(0, 1), 1.0);
    }

    #[test]
    fn test_deposit_empty_tour_is_noop() {
        let mut field = PheromoneField::new(2, 6.0, 0.5).expect("valid");
        field.deposit(&[], 1.0).expect("empty ok");
        assert_eq!(field.get(0, 1), 1.0);
    }
}
