//! Inverse projection: planar (x, y) → geographic (lon, lat).
//!
//! Modes A, B, C, E and F have closed forms; D is purely iterative. The
//! closed forms only undo the strategy's core formula, not the matrix, warp
//! and extraction stages layered on top, so by default each estimate seeds
//! the same damped Newton refinement that D uses.
//!
//! | Mode | Closed form | Sentinel |
//! |------|-------------|----------|
//! | A | Mercator, ×2.0 rescale | - |
//! | B | oblique gnomonic about the reference | - |
//! | C | Lambert, ×1.01 when relativistic | `OutOfDomain` at radius ≥ 1 |
//! | D | none | - |
//! | E | stereographic | - |
//! | F | inverse mode matrix; refinement seeds from the basis | falls back to refinement when singular |

mod closed_form;
mod iterative;


use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ProjectionMode;
use crate::constants::JITTER_SCALE;
use crate::context::ProjectionContext;
use crate::error::{ProjectionError, ProjectionResult};
use crate::point::GeoPoint;

use self::closed_form::ClosedForm;

pub use self::iterative::planar_residual;

/// Result of an inverse projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Unprojected {
    /// Recovered geographic coordinates in degrees.
    Coordinates { lon: f64, lat: f64 },
    /// Planar input lies outside the strategy's domain (Lambert radius ≥ 1).
    OutOfDomain,
}

impl Unprojected {
    /// (lon, lat) in degrees; `OutOfDomain` reports the `(0, 0)` sentinel.
    #[inline]
    pub fn coordinates(&self) -> (f64, f64) {
        match *self {
            Unprojected::Coordinates { lon, lat } => (lon, lat),
            Unprojected::OutOfDomain => (0.0, 0.0),
        }
    }

    #[inline]
    pub fn is_out_of_domain(&self) -> bool {
        matches!(self, Unprojected::OutOfDomain)
    }
}

/// Invert planar (x, y) under `mode`.
///
/// `reference` centres modes B and F and seeds the refinement; without it
/// refinement starts from (0°, 0°).
///
/// # Errors
///
/// `InvalidArgument` for a zero iteration budget or non-finite input.
/// `NearSingularMatrix` is handled internally by mode F.
pub fn unproject(
    mode: ProjectionMode,
    x: f64,
    y: f64,
    reference: Option<&GeoPoint>,
    iterations: usize,
    ctx: &ProjectionContext<'_>,
) -> ProjectionResult<Unprojected> {
    if iterations == 0 {
        return Err(ProjectionError::InvalidArgument(
            "iteration budget must be at least 1".to_string(),
        ));
    }
    if !x.is_finite() || !y.is_finite() {
        return Err(ProjectionError::InvalidArgument(format!(
            "planar coordinates must be finite, got ({}, {})",
            x, y
        )));
    }

    let origin = reference
        .map(|r| (r.lambda(), r.phi()))
        .unwrap_or((0.0, 0.0));

    let estimate = match closed_form::estimate(mode, x, y, reference, ctx) {
        Ok(estimate) => estimate,
        Err(ProjectionError::NearSingularMatrix {
            pseudo_determinant,
            threshold,
        }) => {
            warn!(
                %mode,
                pseudo_determinant,
                threshold,
                "Mode matrix is near-singular, falling back to iterative inversion"
            );
            ClosedForm::Iterative
        }
        Err(e) => return Err(e),
    };

    let (lon, lat) = match estimate {
        ClosedForm::OutOfDomain => {
            debug!(%mode, x, y, "Planar input outside the inverse domain");
            return Ok(Unprojected::OutOfDomain);
        }
        ClosedForm::Iterative => iterative::refine(mode, x, y, origin, reference, iterations, ctx),
        ClosedForm::Estimate { lon, lat } if ctx.config.refine_closed_form => {
            // F's matrix estimate can land on the far side of the basis view.
            let candidate = match mode {
                ProjectionMode::HilbertSpaceEquidistant => {
                    closed_form::hilbert_seed(x, y, reference, ctx).unwrap_or(origin)
                }
                _ => (lon, lat),
            };
            let from_candidate = planar_residual(mode, x, y, candidate, reference, ctx);
            let from_origin = planar_residual(mode, x, y, origin, reference, ctx);
            let start = if from_candidate <= from_origin {
                candidate
            } else {
                origin
            };
            iterative::refine(mode, x, y, start, reference, iterations, ctx)
        }
        ClosedForm::Estimate { lon, lat } => (lon, lat),
    };

    let (lon, lat) = match mode {
        ProjectionMode::QuantumGnomonic | ProjectionMode::HeisenbergStereographic
            if ctx.quantum_enabled() =>
        {
            (
                lon + ctx.gaussian() * JITTER_SCALE,
                lat + ctx.gaussian() * JITTER_SCALE,
            )
        }
        _ => (lon, lat),
    };

    Ok(Unprojected::Coordinates { lon, lat })
}
