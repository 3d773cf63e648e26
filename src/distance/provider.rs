//! Distance provider trait.

use crate::error::{AcsError, AcsResult};

/// Read-only access to pairwise distances for a TSP instance.
///
/// This trait is the interface the solver uses to query problem data.
/// Implementations supply the node count and pairwise distances; tour
/// length, node enumeration, and the maximum edge weight have default
/// implementations in terms of those two.
///
/// Implementations must never return a distance of exactly zero for two
/// distinct nodes: the solver divides by distances when computing edge
/// desirability, so a provider whose metric can collapse two nodes has to
/// substitute a small positive floor (see
/// [`DistanceMatrix::from_points`](super::DistanceMatrix::from_points)).
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::DistanceProvider;
///
/// struct Ring(usize);
///
/// impl DistanceProvider for Ring {
///     fn size(&self) -> usize { self.0 }
///     fn distance(&self, from: usize, to: usize) -> f64 {
///         let d = (from as i64 - to as i64).unsigned_abs() as usize;
///         d.min(self.0 - d) as f64
///     }
/// }
///
/// let ring = Ring(4);
/// assert_eq!(ring.nodes(), vec![0, 1, 2, 3]);
/// assert_eq!(ring.path_length(&[0, 1, 2, 3]).unwrap(), 4.0);
/// assert_eq!(ring.max_edge_weight(), 2.0);
/// ```
pub trait DistanceProvider {
    /// Number of nodes in the instance.
    fn size(&self) -> usize;

    /// Distance from node `from` to node `to`, defined for indices in
    /// `0..size()`. Non-negative.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Returns all node indices `0..size()`.
    fn nodes(&self) -> Vec<usize> {
        (0..self.size()).collect()
    }

    /// Length of a closed tour: the sum of distances along consecutive
    /// entries plus the closing edge from the last node back to the first.
    ///
    /// Rotating a tour does not change its length. An empty tour has
    /// length 0.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidIndex`] if any entry is `>= size()`.
    fn path_length(&self, tour: &[usize]) -> AcsResult<f64> {
        let size = self.size();
        for &node in tour {
            if node >= size {
                return Err(AcsError::InvalidIndex { index: node, size });
            }
        }
        let Some((&first, _)) = tour.split_first() else {
            return Ok(0.0);
        };
        let mut total = 0.0;
        for pair in tour.windows(2) {
            total += self.distance(pair[0], pair[1]);
        }
        Ok(total + self.distance(tour[tour.len() - 1], first))
    }

    /// Maximum distance over all ordered node pairs.
    ///
    /// Callers commonly derive the pheromone deposit constant from this,
    /// `Q = size() * max_edge_weight()`.
    fn max_edge_weight(&self) -> f64 {
        let n = self.size();
        let mut max = 0.0f64;
        for from in 0..n {
            for to in 0..n {
                max = max.max(self.distance(from, to));
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
    }

    #[test]
    fn test_path_length_closed_cycle() {
        let dm = square();
        let len = dm.path_length(&[0, 1, 2, 3]).expect("valid tour");
        assert!((len - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_path_length_rotation_invariant() {
        let dm = square();
        let a = dm.path_length(&[0, 1, 2, 3]).expect("valid");
        let b = dm.path_length(&[2, 3, 0, 1]).expect("valid");
        assert!((a - b).abs() < 1e-10);
    }

    #[test]
    fn test_path_length_empty() {
        let dm = square();
        assert_eq!(dm.path_length(&[]).expect("empty ok"), 0.0);
    }

    #[test]
    fn test_path_length_invalid_index() {
        let dm = square();
        let err = dm.path_length(&[0, 1, 9]).expect_err("out of range");
        assert!(matches!(err, AcsError::InvalidIndex { index: 9, size: 4 }));
    }

    #[test]
    fn test_nodes() {
        assert_eq!(square().nodes(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_max_edge_weight_is_diagonal() {
        let dm = square();
        assert!((dm.max_edge_weight() - 2.0f64.sqrt()).abs() < 1e-10);
    }
}
