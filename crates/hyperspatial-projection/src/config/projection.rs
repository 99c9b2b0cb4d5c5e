//! Projection engine configuration.

use serde::{Deserialize, Serialize};

use super::ProjectionMode;
use crate::constants::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_SINGULARITY_THRESHOLD};
use crate::error::ProjectionError;

/// Active projection mode and feature toggles.
///
/// Field/curvature caches are keyed only by coordinates, so every change to
/// this struct inside an engine clears them.
///
/// # Example
/// ```
/// use hyperspatial_projection::config::{ProjectionConfig, ProjectionMode};
///
/// let config = ProjectionConfig::default();
/// assert_eq!(config.mode, ProjectionMode::HyperMercator);
/// assert_eq!(config.tensor_resolution, 1.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Projection algorithm used by every forward and inverse call.
    pub mode: ProjectionMode,

    /// Adds seeded stochastic jitter to points and to modes B and E.
    pub quantum_correction: bool,

    /// Grid spacing (degrees) to which field and curvature lookups snap.
    /// Must be positive and finite.
    pub tensor_resolution: f64,

    /// Enables the Lorentz-style and gravitational corrections.
    pub relativistic: bool,

    /// Allows batch projection to fan out across the rayon pool.
    pub parallel: bool,

    /// Seed for the jitter source and the Hilbert basis.
    pub seed: u64,

    /// |pseudo-determinant| below which matrix inversion fails.
    /// Default: 1e-10
    pub singularity_threshold: f64,

    /// Batches strictly larger than this go parallel. Must be >= 1.
    pub parallel_threshold: usize,

    /// Polish closed-form inverses with iterative refinement.
    pub refine_closed_form: bool,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::HyperMercator,
            quantum_correction: false,
            tensor_resolution: 1.0,
            relativistic: false,
            parallel: true,
            seed: 42,
            singularity_threshold: DEFAULT_SINGULARITY_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            refine_closed_form: true,
        }
    }
}

impl ProjectionConfig {
    /// Create config with a given mode, other fields defaulted.
    pub fn with_mode(mode: ProjectionMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Build a validated config from the raw `configure` arguments.
    ///
    /// An unknown mode code is reported as `InvalidConfiguration`.
    ///
    /// # Example
    /// ```
    /// use hyperspatial_projection::config::ProjectionConfig;
    ///
    /// assert!(ProjectionConfig::from_parts("TENSOR_AZIMUTHAL", false, 0.5, false, true, 7).is_ok());
    /// assert!(ProjectionConfig::from_parts("NOT_A_MODE", false, 1.0, false, true, 7).is_err());
    /// assert!(ProjectionConfig::from_parts("HYPER_MERCATOR", false, -1.0, false, true, 7).is_err());
    /// ```
    pub fn from_parts(
        mode: &str,
        quantum_correction: bool,
        tensor_resolution: f64,
        relativistic: bool,
        parallel: bool,
        seed: u64,
    ) -> Result<Self, ProjectionError> {
        let mode: ProjectionMode = mode.parse().map_err(|err: ProjectionError| {
            ProjectionError::InvalidConfiguration(err.to_string())
        })?;
        let config = Self {
            mode,
            quantum_correction,
            tensor_resolution,
            relativistic,
            parallel,
            seed,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ProjectionError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every parameter, returning the FIRST error encountered.
    ///
    /// # Errors
    /// `ProjectionError::InvalidConfiguration` when:
    /// - `tensor_resolution` is not a positive finite number
    /// - `singularity_threshold` is not a positive finite number
    /// - `parallel_threshold` is 0
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.tensor_resolution.is_finite() || self.tensor_resolution <= 0.0 {
            return Err(ProjectionError::InvalidConfiguration(format!(
                "tensor_resolution must be positive and finite (got {})",
                self.tensor_resolution
            )));
        }

        if !self.singularity_threshold.is_finite() || self.singularity_threshold <= 0.0 {
            return Err(ProjectionError::InvalidConfiguration(format!(
                "singularity_threshold must be positive and finite (got {})",
                self.singularity_threshold
            )));
        }

        if self.parallel_threshold == 0 {
            return Err(ProjectionError::InvalidConfiguration(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
