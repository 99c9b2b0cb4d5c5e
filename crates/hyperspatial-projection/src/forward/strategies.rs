//! The six forward strategies.
//!
//! Every strategy receives an already-built (possibly jittered) point and
//! returns a full 6-D vector; planar reduction happens afterwards.

use std::f64::consts::FRAC_PI_4;

use tracing::warn;

use super::basis::hilbert_basis;
use super::ForwardVector;
use crate::config::ProjectionMode;
use crate::constants::{
    ECCENTRICITY_SQ, GEOMETRY_EPS, GOLDEN_RATIO, JITTER_SCALE, LORENTZ_DENOMINATOR, MAX_BETA,
    SCHWARZSCHILD_RADIUS, SEMI_MAJOR_AXIS, TENSOR_DIM,
};
use crate::context::ProjectionContext;
use crate::matrix::{base_coefficients, build_projection_matrix};
use crate::point::GeoPoint;

/// Default gnomonic centre: the north pole at λ = 0.
const DEFAULT_GNOMONIC_CENTRE: (f64, f64) = (0.0, 90.0);

/// Component order of the tensor-azimuthal view (orthographic about 0°, 0°).
const AZIMUTHAL_AXES: [usize; TENSOR_DIM] = [1, 2, 0, 3, 4, 5];

/// A: Mercator, warped higher components, then the mode matrix.
pub(super) fn hyper_mercator(
    point: &GeoPoint,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ForwardVector {
    let (lambda, phi) = point.radians();
    let c = point.components();
    let warp = 1.0 + 0.01 * (10.0 * lambda).sin() * (8.0 * phi).cos();

    let mercator = [
        lambda,
        (FRAC_PI_4 + phi / 2.0).tan().ln(),
        point.altitude() / SEMI_MAJOR_AXIS,
        c[3] * warp,
        c[4] * warp,
        c[5] * warp,
    ];

    let matrix = build_projection_matrix(ProjectionMode::HyperMercator, reference, ctx);
    ForwardVector::Projected(matrix.multiply(&mercator))
}

/// B: gnomonic about the reference (default north pole), scaled by the
/// mode's curvature factor.
///
/// Degenerate at the centre, its antipode, and on the great circle 90°
/// from the centre (the equator for the default pole), where `cos c`
/// vanishes.
pub(super) fn quantum_gnomonic(
    point: &GeoPoint,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ForwardVector {
    let (lambda, phi) = point.radians();
    let (lambda0, phi0) = gnomonic_centre(reference);
    let (sin_p, cos_p) = phi.sin_cos();
    let (sin_p0, cos_p0) = phi0.sin_cos();
    let (sin_dl, cos_dl) = (lambda - lambda0).sin_cos();

    let cos_c = sin_p0 * sin_p + cos_p0 * cos_p * cos_dl;
    if cos_c.abs() > 1.0 - GEOMETRY_EPS || cos_c.abs() < GEOMETRY_EPS {
        warn!(
            lon = point.lambda(),
            lat = point.phi(),
            cos_c,
            "Degenerate gnomonic geometry, returning raw components"
        );
        return ForwardVector::Degenerate(*point.components());
    }

    let k = ProjectionMode::QuantumGnomonic.curvature_factor(ctx.config.relativistic);
    let x = cos_p * sin_dl / cos_c;
    let y = (cos_p0 * sin_p - sin_p0 * cos_p * cos_dl) / cos_c;

    let mut v = *point.components();
    v[0] = k * x;
    v[1] = k * y;
    if ctx.quantum_enabled() {
        for d in v.iter_mut().skip(2) {
            *d += ctx.gaussian() * JITTER_SCALE;
        }
    }
    ForwardVector::Projected(v)
}

/// Centre of the gnomonic projection in radians.
pub(crate) fn gnomonic_centre(reference: Option<&GeoPoint>) -> (f64, f64) {
    match reference {
        Some(r) => r.radians(),
        None => (
            DEFAULT_GNOMONIC_CENTRE.0.to_radians(),
            DEFAULT_GNOMONIC_CENTRE.1.to_radians(),
        ),
    }
}

/// C: Lambert (x = cosφ·sinλ, y = sinφ) with optional Lorentz-style and
/// gravitational scaling.
pub(super) fn relativistic_lambert(point: &GeoPoint, ctx: &ProjectionContext<'_>) -> ForwardVector {
    let (lambda, phi) = point.radians();
    let mut v = *point.components();
    v[0] = phi.cos() * lambda.sin();
    v[1] = phi.sin();

    if ctx.config.relativistic {
        let gamma = lorentz_gamma(point.time_offset());
        v[0] /= gamma;
        v[1] /= gamma;
        v[5] *= gamma;

        let radius = (SEMI_MAJOR_AXIS + point.altitude()).abs().max(1.0);
        let gravity = 1.0 - SCHWARZSCHILD_RADIUS / radius;
        v[0] *= gravity;
        v[1] *= gravity;
    }
    ForwardVector::Projected(v)
}

/// γ = 1/sqrt(1 − β²) with β = min(0.99, |t|/3e8).
#[inline]
pub fn lorentz_gamma(t_offset: f64) -> f64 {
    let beta = (t_offset.abs() / LORENTZ_DENOMINATOR).min(MAX_BETA);
    1.0 / (1.0 - beta * beta).sqrt()
}

/// D: contract the tensor field against the base table and the point's
/// components, perturb an orthographic view about (0°, 0°), then correct
/// x and y for ellipsoidal flattening.
pub(super) fn tensor_azimuthal(point: &GeoPoint, ctx: &ProjectionContext<'_>) -> ForwardVector {
    let c = point.components();
    let field = ctx.field_vector(point.lambda(), point.phi());
    let base = base_coefficients();

    let mut v = [0.0; TENSOR_DIM];
    for (i, out) in v.iter_mut().enumerate() {
        let contraction: f64 = (0..TENSOR_DIM).map(|j| base[i][j] * field[j] * c[j]).sum();
        *out = c[AZIMUTHAL_AXES[i]] + 0.1 * contraction;
    }

    let (_, phi) = point.radians();
    let flattening = (1.0 - ECCENTRICITY_SQ * phi.sin().powi(2)).sqrt();
    v[0] *= flattening;
    v[1] *= flattening;
    ForwardVector::Projected(v)
}

/// E: stereographic from the north pole, k = 2/(1 + sinφ).
pub(super) fn heisenberg_stereographic(point: &GeoPoint, ctx: &ProjectionContext<'_>) -> ForwardVector {
    let (lambda, phi) = point.radians();
    let (sin_l, cos_l) = lambda.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    let k = 2.0 / (1.0 + sin_p);

    let mut v = *point.components();
    v[0] = k * cos_p * sin_l;
    v[1] = -k * cos_p * cos_l;

    if ctx.quantum_enabled() {
        let sigma = GOLDEN_RATIO / (2.0 * point.uncertainty_radius()) * 1e-8;
        for d in v.iter_mut() {
            *d += ctx.gaussian() * sigma;
        }
    }
    ForwardVector::Projected(v)
}

/// F: components onto the seeded orthonormal basis, then a curvature
/// scaling of 1 + 0.01·curvature·sin(i) per dimension.
pub(super) fn hilbert_equidistant(
    point: &GeoPoint,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ForwardVector {
    let basis = hilbert_basis(ctx.config.seed, reference);
    let c = point.components();
    let curvature = ctx.curvature(point.lambda(), point.phi());

    let mut v = [0.0; TENSOR_DIM];
    for (i, (out, row)) in v.iter_mut().zip(basis.iter()).enumerate() {
        let dot: f64 = row.iter().zip(c.iter()).map(|(b, x)| b * x).sum();
        *out = dot * (1.0 + 0.01 * curvature * (i as f64).sin());
    }
    ForwardVector::Projected(v)
}
