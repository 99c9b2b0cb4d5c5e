//! Matrix operations: multiply, transpose, pseudo-determinant, inversion.

use tracing::trace;

use super::types::ProjectionMatrix;
use crate::constants::TENSOR_DIM;
use crate::error::{ProjectionError, ProjectionResult};

impl ProjectionMatrix {
    /// Matrix-vector product `M·v`.
    pub fn multiply(&self, v: &[f64; TENSOR_DIM]) -> [f64; TENSOR_DIM] {
        let mut out = [0.0; TENSOR_DIM];
        for (o, row) in out.iter_mut().zip(self.rows().iter()) {
            *o = row.iter().zip(v.iter()).map(|(m, x)| m * x).sum();
        }
        out
    }

    /// Transposed copy; scalars are carried over unchanged.
    pub fn transpose(&self) -> Self {
        let mut rows = [[0.0; TENSOR_DIM]; TENSOR_DIM];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = self.get(j, i);
            }
        }
        Self::new(rows, self.curvature_factor(), self.singularity_threshold())
    }

    /// Product of the diagonal entries.
    ///
    /// A cheap singularity screen: a matrix with any zero on the diagonal
    /// is refused even if a row permutation would make it invertible.
    pub fn pseudo_determinant(&self) -> f64 {
        (0..TENSOR_DIM).map(|i| self.get(i, i)).product()
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Errors
    ///
    /// `NearSingularMatrix` when |pseudo-determinant| < threshold, or when
    /// elimination meets a pivot smaller than `f64::EPSILON`.
    ///
    /// # Example
    /// ```
    /// use hyperspatial_projection::matrix::ProjectionMatrix;
    ///
    /// // Zero diagonal is refused outright.
    /// let zero = ProjectionMatrix::from_rows([[0.0; 6]; 6]);
    /// assert!(zero.invert().is_err());
    /// ```
    pub fn invert(&self) -> ProjectionResult<Self> {
        let pseudo_determinant = self.pseudo_determinant();
        let threshold = self.singularity_threshold();
        if pseudo_determinant.is_nan() || pseudo_determinant.abs() < threshold {
            return Err(ProjectionError::NearSingularMatrix {
                pseudo_determinant,
                threshold,
            });
        }

        let mut a = *self.rows();
        let mut inv = *ProjectionMatrix::identity().rows();

        for col in 0..TENSOR_DIM {
            let pivot_row = (col..TENSOR_DIM)
                .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
                .unwrap_or(col);
            let pivot = a[pivot_row][col];
            if pivot.abs() < f64::EPSILON {
                trace!(col, pivot, "Vanishing pivot during inversion");
                return Err(ProjectionError::NearSingularMatrix {
                    pseudo_determinant,
                    threshold,
                });
            }
            a.swap(col, pivot_row);
            inv.swap(col, pivot_row);

            for j in 0..TENSOR_DIM {
                a[col][j] /= pivot;
                inv[col][j] /= pivot;
            }

            for row in 0..TENSOR_DIM {
                if row == col {
                    continue;
                }
                let factor = a[row][col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..TENSOR_DIM {
                    a[row][j] -= factor * a[col][j];
                    inv[row][j] -= factor * inv[col][j];
                }
            }
        }

        Ok(Self::new(inv, self.curvature_factor(), threshold))
    }
}
