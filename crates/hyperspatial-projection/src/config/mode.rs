//! Projection mode codes and per-mode constants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// One of the six projection algorithms.
///
/// Each variant owns its forward/inverse strategy pair, its additive matrix
/// term, its planar scale and its curvature factor.
///
/// # Example
/// ```
/// use hyperspatial_projection::config::ProjectionMode;
///
/// let mode: ProjectionMode = "heisenberg-stereographic".parse().unwrap();
/// assert_eq!(mode, ProjectionMode::HeisenbergStereographic);
/// assert_eq!(mode.code(), "HEISENBERG_STEREOGRAPHIC");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectionMode {
    /// A: Mercator pushed through the mode matrix.
    #[default]
    HyperMercator,
    /// B: gnomonic about a reference point.
    QuantumGnomonic,
    /// C: Lambert equal-area with optional relativistic scaling.
    RelativityAdaptedLambert,
    /// D: tensor-field contraction over an azimuthal view.
    TensorAzimuthal,
    /// E: north-polar stereographic.
    HeisenbergStereographic,
    /// F: projection onto an orthonormalised random basis.
    HilbertSpaceEquidistant,
}

impl ProjectionMode {
    /// All modes, in code-table order.
    pub const ALL: [ProjectionMode; 6] = [
        ProjectionMode::HyperMercator,
        ProjectionMode::QuantumGnomonic,
        ProjectionMode::RelativityAdaptedLambert,
        ProjectionMode::TensorAzimuthal,
        ProjectionMode::HeisenbergStereographic,
        ProjectionMode::HilbertSpaceEquidistant,
    ];

    /// Stable string code.
    pub fn code(self) -> &'static str {
        match self {
            ProjectionMode::HyperMercator => "HYPER_MERCATOR",
            ProjectionMode::QuantumGnomonic => "QUANTUM_GNOMONIC",
            ProjectionMode::RelativityAdaptedLambert => "RELATIVITY_ADAPTED_LAMBERT",
            ProjectionMode::TensorAzimuthal => "TENSOR_AZIMUTHAL",
            ProjectionMode::HeisenbergStereographic => "HEISENBERG_STEREOGRAPHIC",
            ProjectionMode::HilbertSpaceEquidistant => "HILBERT_SPACE_EQUIDISTANT",
        }
    }

    /// Final scale applied to both planar coordinates.
    #[inline]
    pub fn planar_scale(self) -> f64 {
        match self {
            ProjectionMode::HyperMercator => 0.5,
            ProjectionMode::QuantumGnomonic => 0.4,
            ProjectionMode::RelativityAdaptedLambert => 0.45,
            ProjectionMode::TensorAzimuthal => 0.35,
            ProjectionMode::HeisenbergStereographic => 0.3,
            ProjectionMode::HilbertSpaceEquidistant => 0.38,
        }
    }

    /// Curvature factor carried by this mode's projection matrix.
    #[inline]
    pub fn curvature_factor(self, relativistic: bool) -> f64 {
        match self {
            ProjectionMode::QuantumGnomonic | ProjectionMode::TensorAzimuthal => 1.5,
            ProjectionMode::RelativityAdaptedLambert if relativistic => 2.0,
            ProjectionMode::RelativityAdaptedLambert => 1.2,
            ProjectionMode::HeisenbergStereographic => 0.8,
            ProjectionMode::HyperMercator | ProjectionMode::HilbertSpaceEquidistant => 1.0,
        }
    }

    /// Mode-specific additive term for matrix entry (i, j).
    pub fn additive_term(self, i: usize, j: usize) -> f64 {
        let (fi, fj) = (i as f64, j as f64);
        match self {
            ProjectionMode::HyperMercator => {
                if i == j {
                    0.2
                } else {
                    0.0
                }
            }
            ProjectionMode::QuantumGnomonic => 0.3 * (fi * fi + fj * fj).sqrt() / 6.0,
            ProjectionMode::RelativityAdaptedLambert => 0.1 * (fi - fj).abs() / 6.0,
            ProjectionMode::TensorAzimuthal => 0.25 * (fi + fj) / 12.0,
            ProjectionMode::HeisenbergStereographic => 0.15 * (-(fi - fj).powi(2) / 10.0).exp(),
            ProjectionMode::HilbertSpaceEquidistant => 0.2 * (fi * fj / 5.0).sin(),
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ProjectionMode {
    type Err = ProjectionError;

    /// Case-insensitive; `-` and `_` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        ProjectionMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.code() == normalized)
            .ok_or_else(|| ProjectionError::UnsupportedMode(s.to_string()))
    }
}
