//! Forward projection: hypervector point → 6-D result → planar (x, y).
//!
//! Each [`ProjectionMode`] has exactly one strategy in `strategies`; the
//! match in [`forward_vector`] is the whole dispatch table. Planar reduction
//! is shared by every mode and lives in `planar`.

mod basis;
mod planar;
mod strategies;


pub use self::basis::{gram_schmidt, hilbert_basis};
pub use self::planar::{extract_planar, PlanarPoint};
pub use self::strategies::lorentz_gamma;

pub(crate) use self::strategies::gnomonic_centre;

use crate::config::ProjectionMode;
use crate::constants::TENSOR_DIM;
use crate::context::ProjectionContext;
use crate::point::GeoPoint;

/// Outcome of a forward strategy.
///
/// `Degenerate` marks geometry the strategy cannot project (near-antipodal
/// or tangent gnomonic points); it carries the point's raw components, which
/// are then reduced to planar coordinates like any other vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForwardVector {
    Projected([f64; TENSOR_DIM]),
    Degenerate([f64; TENSOR_DIM]),
}

impl ForwardVector {
    #[inline]
    pub fn vector(&self) -> &[f64; TENSOR_DIM] {
        match self {
            ForwardVector::Projected(v) | ForwardVector::Degenerate(v) => v,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ForwardVector::Degenerate(_))
    }
}

/// Run the strategy for `mode`.
pub fn forward_vector(
    mode: ProjectionMode,
    point: &GeoPoint,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ForwardVector {
    match mode {
        ProjectionMode::HyperMercator => strategies::hyper_mercator(point, reference, ctx),
        ProjectionMode::QuantumGnomonic => strategies::quantum_gnomonic(point, reference, ctx),
        ProjectionMode::RelativityAdaptedLambert => strategies::relativistic_lambert(point, ctx),
        ProjectionMode::TensorAzimuthal => strategies::tensor_azimuthal(point, ctx),
        ProjectionMode::HeisenbergStereographic => strategies::heisenberg_stereographic(point, ctx),
        ProjectionMode::HilbertSpaceEquidistant => {
            strategies::hilbert_equidistant(point, reference, ctx)
        }
    }
}

/// Strategy followed by planar extraction.
#[inline]
pub fn project_point(
    mode: ProjectionMode,
    point: &GeoPoint,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> PlanarPoint {
    extract_planar(forward_vector(mode, point, reference, ctx).vector(), mode)
}
