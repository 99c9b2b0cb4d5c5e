//! ProjectionMatrix type definition.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SINGULARITY_THRESHOLD, TENSOR_DIM};

/// Row-major 6×6 array.
pub type Matrix6 = [[f64; TENSOR_DIM]; TENSOR_DIM];

/// Immutable 6×6 transform plus the two scalars that travel with it.
///
/// # Example
/// ```
/// use hyperspatial_projection::matrix::ProjectionMatrix;
///
/// let m = ProjectionMatrix::identity();
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// assert_eq!(m.multiply(&v), v);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMatrix {
    rows: Matrix6,
    curvature_factor: f64,
    singularity_threshold: f64,
}

impl ProjectionMatrix {
    pub fn new(rows: Matrix6, curvature_factor: f64, singularity_threshold: f64) -> Self {
        Self {
            rows,
            curvature_factor,
            singularity_threshold,
        }
    }

    /// Matrix with unit curvature factor and the default threshold.
    pub fn from_rows(rows: Matrix6) -> Self {
        Self::new(rows, 1.0, DEFAULT_SINGULARITY_THRESHOLD)
    }

    pub fn identity() -> Self {
        let mut rows = [[0.0; TENSOR_DIM]; TENSOR_DIM];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self::from_rows(rows)
    }

    #[inline]
    pub fn rows(&self) -> &Matrix6 {
        &self.rows
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }

    #[inline]
    pub fn curvature_factor(&self) -> f64 {
        self.curvature_factor
    }

    #[inline]
    pub fn singularity_threshold(&self) -> f64 {
        self.singularity_threshold
    }
}
