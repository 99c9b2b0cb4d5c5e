//! Error types for the projection engine.
//!
//! Degenerate geometry (antipodal gnomonic points, Lambert radius outside the
//! unit disc) is NOT an error: those cases come back as explicit variants of
//! [`crate::forward::ForwardVector`] and [`crate::inverse::Unprojected`].
//! Everything here is a real failure that callers are expected to propagate.

use thiserror::Error;

/// Result type alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Error type for all projection engine operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    // ========== Configuration Errors ==========
    /// Configuration rejected at `configure` time.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Dispatch reached a mode code that is not one of the six projections.
    #[error("Unsupported projection mode: {0}")]
    UnsupportedMode(String),

    // ========== Numerical Errors ==========
    /// Matrix inversion refused because the pseudo-determinant is too small.
    #[error(
        "Near-singular matrix: |pseudo-determinant| = {pseudo_determinant:e} below threshold {threshold:e}"
    )]
    NearSingularMatrix {
        pseudo_determinant: f64,
        threshold: f64,
    },

    // ========== Validation Errors ==========
    /// Utility input that cannot be evaluated (grid bounds, falloff, budgets).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProjectionError {
    /// True when a caller has a defined fallback for this error.
    ///
    /// Only the singular-matrix case qualifies: the Hilbert-space inverse
    /// falls back to iterative refinement.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ProjectionError::NearSingularMatrix { .. })
    }
}

impl From<serde_json::Error> for ProjectionError {
    fn from(err: serde_json::Error) -> Self {
        ProjectionError::InvalidConfiguration(err.to_string())
    }
}

static_assertions::assert_impl_all!(ProjectionError: Send, Sync, std::error::Error);
