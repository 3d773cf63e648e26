//! Dense distance matrix.

use crate::distance::DistanceProvider;
use crate::error::{AcsError, AcsResult};

/// Smallest edge weight handed to the solver for distinct nodes.
///
/// Two distinct nodes at identical coordinates would otherwise produce a
/// zero distance, and the solver divides by distances when scoring edges.
pub const MIN_EDGE_WEIGHT: f64 = 0.001;

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports Euclidean distance computation from node coordinates and
/// explicit distance specification. This is the default
/// [`DistanceProvider`] implementation.
///
/// # Examples
///
/// ```
/// use acs_tsp::distance::{DistanceMatrix, DistanceProvider};
///
/// let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from node coordinates.
    ///
    /// Distinct nodes whose coordinates coincide get the distance floor
    /// [`MIN_EDGE_WEIGHT`] instead of zero; the diagonal stays zero.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let mut d = (dx * dx + dy * dy).sqrt();
                if d == 0.0 {
                    d = MIN_EDGE_WEIGHT;
                }
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::InvalidArgument`] if the data length doesn't
    /// match `size * size` (a non-square matrix).
    pub fn from_data(size: usize, data: Vec<f64>) -> AcsResult<Self> {
        if data.len() != size * size {
            return Err(AcsError::InvalidArgument(format!(
                "distance matrix must be square: got {} entries for size {}",
                data.len(),
                size
            )));
        }
        Ok(Self { data, size })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest node to `from` among the given candidates.
    ///
    /// Returns `None` if `candidates` is empty.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates.iter().copied().min_by(|&a, &b| {
            self.get(from, a)
                .partial_cmp(&self.get(from, b))
                .expect("distance should not be NaN")
        })
    }
}

impl DistanceProvider for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }
}
