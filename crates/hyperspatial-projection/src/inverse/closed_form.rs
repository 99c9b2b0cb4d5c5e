//! Analytic inverses for the modes that have one.

use std::f64::consts::FRAC_PI_2;

use crate::config::ProjectionMode;
use crate::constants::{
    GEOMETRY_EPS, LAMBERT_RELATIVISTIC_RESCALE, MERCATOR_INVERSE_RESCALE, TENSOR_DIM,
};
use crate::context::ProjectionContext;
use crate::error::ProjectionResult;
use crate::forward::{gnomonic_centre, hilbert_basis};
use crate::matrix::build_projection_matrix;
use crate::point::{wrap_longitude, GeoPoint};

/// Analytic estimate, or the reason there is none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ClosedForm {
    Estimate { lon: f64, lat: f64 },
    OutOfDomain,
    Iterative,
}

impl ClosedForm {
    fn from_radians(lambda: f64, phi: f64) -> Self {
        ClosedForm::Estimate {
            lon: wrap_longitude(lambda.to_degrees()),
            lat: phi.to_degrees(),
        }
    }
}

/// Closed-form estimate for `mode`.
///
/// Only mode F can fail, with the `NearSingularMatrix` raised by inverting
/// its matrix.
pub(super) fn estimate(
    mode: ProjectionMode,
    x: f64,
    y: f64,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ProjectionResult<ClosedForm> {
    let scale = mode.planar_scale();
    let (px, py) = (x / scale, y / scale);

    let estimate = match mode {
        ProjectionMode::HyperMercator => {
            let lambda = x * MERCATOR_INVERSE_RESCALE;
            let phi = 2.0 * (y * MERCATOR_INVERSE_RESCALE).exp().atan() - FRAC_PI_2;
            ClosedForm::from_radians(lambda, phi)
        }
        ProjectionMode::QuantumGnomonic => {
            let k = mode.curvature_factor(ctx.config.relativistic);
            gnomonic(px / k, py / k, reference)
        }
        ProjectionMode::RelativityAdaptedLambert => {
            let (px, py) = without_z_scale(px, py);
            let (px, py) = if ctx.config.relativistic {
                (px * LAMBERT_RELATIVISTIC_RESCALE, py * LAMBERT_RELATIVISTIC_RESCALE)
            } else {
                (px, py)
            };
            lambert(px, py)
        }
        ProjectionMode::TensorAzimuthal => ClosedForm::Iterative,
        ProjectionMode::HeisenbergStereographic => {
            let rho = px.hypot(py);
            let phi = FRAC_PI_2 - 2.0 * (rho / 2.0).atan();
            ClosedForm::from_radians(px.atan2(-py), phi)
        }
        ProjectionMode::HilbertSpaceEquidistant => {
            let inverse = build_projection_matrix(mode, reference, ctx).invert()?;
            let mut planar = [0.0; TENSOR_DIM];
            planar[0] = px;
            planar[1] = py;
            let w = inverse.multiply(&planar);
            ClosedForm::from_radians(w[1].atan2(w[0]), w[2].atan2(w[0].hypot(w[1])))
        }
    };
    Ok(estimate)
}

/// Oblique gnomonic inverse about the reference (default north pole).
fn gnomonic(x: f64, y: f64, reference: Option<&GeoPoint>) -> ClosedForm {
    let (lambda0, phi0) = gnomonic_centre(reference);
    let rho = x.hypot(y);
    if rho < GEOMETRY_EPS {
        return ClosedForm::from_radians(lambda0, phi0);
    }

    let c = rho.atan();
    let (sin_c, cos_c) = c.sin_cos();
    let (sin_p0, cos_p0) = phi0.sin_cos();
    let phi = (cos_c * sin_p0 + y * sin_c * cos_p0 / rho).clamp(-1.0, 1.0).asin();
    let lambda = lambda0 + (x * sin_c).atan2(rho * cos_p0 * cos_c - y * sin_p0 * sin_c);
    ClosedForm::from_radians(lambda, phi)
}

/// Undo the planar z-scale `1 + 0.01·v[2]` of a Lambert vector.
///
/// For Lambert v[2] = sinφ = v[1] (up to the relativistic factors), so
/// y = s·(1 + 0.01·s) is solved for s before x is unscaled.
fn without_z_scale(x: f64, y: f64) -> (f64, f64) {
    let s = ((1.0 + 0.04 * y).max(0.0).sqrt() - 1.0) / 0.02;
    (x / (1.0 + 0.01 * s), s)
}

/// Lambert inverse: φ = asin(y), λ = asin(x / cosφ).
fn lambert(x: f64, y: f64) -> ClosedForm {
    if x.hypot(y) >= 1.0 - GEOMETRY_EPS {
        return ClosedForm::OutOfDomain;
    }
    let phi = y.asin();
    let cos_p = phi.cos();
    let lambda = if cos_p > GEOMETRY_EPS {
        (x / cos_p).clamp(-1.0, 1.0).asin()
    } else {
        0.0
    };
    ClosedForm::from_radians(lambda, phi)
}

/// Fixed-point passes folding the higher components and the per-dimension
/// scales back into [`hilbert_seed`].
const HILBERT_SEED_PASSES: usize = 3;

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(p, q)| p * q).sum()
}

/// Near-side preimage of (x, y) under the Hilbert basis, in degrees.
///
/// Basis rows 0 and 1 feed x and y. The minimum-norm solution in the plane
/// spanned by their spatial parts is lifted onto the unit sphere along the
/// plane normal, on the side facing (0°, 0°). The view folds at its limb,
/// so a point past the limb shares its planar image with this near-side
/// point. `None` when the two rows are parallel.
pub(super) fn hilbert_seed(
    x: f64,
    y: f64,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> Option<(f64, f64)> {
    let scale = ProjectionMode::HilbertSpaceEquidistant.planar_scale();
    let (px, py) = (x / scale, y / scale);
    let basis = hilbert_basis(ctx.config.seed, reference);
    let r0 = [basis[0][0], basis[0][1], basis[0][2]];
    let r1 = [basis[1][0], basis[1][1], basis[1][2]];

    let (g00, g01, g11) = (dot(&r0, &r0), dot(&r0, &r1), dot(&r1, &r1));
    let det = g00 * g11 - g01 * g01;
    if det.abs() < GEOMETRY_EPS {
        return None;
    }

    let mut normal = [
        r0[1] * r1[2] - r0[2] * r1[1],
        r0[2] * r1[0] - r0[0] * r1[2],
        r0[0] * r1[1] - r0[1] * r1[0],
    ];
    let norm = dot(&normal, &normal).sqrt();
    let facing = if normal[0] < 0.0 { -1.0 } else { 1.0 };
    for n in normal.iter_mut() {
        *n *= facing / norm;
    }

    let mut higher = [0.0; 3];
    let (mut z_scale, mut y_scale) = (1.0, 1.0);
    let mut seed = (0.0, 0.0);
    for _ in 0..HILBERT_SEED_PASSES {
        let t0 = px / z_scale - dot(&basis[0][3..], &higher);
        let t1 = py / (z_scale * y_scale) - dot(&basis[1][3..], &higher);
        let l0 = (g11 * t0 - g01 * t1) / det;
        let l1 = (g00 * t1 - g01 * t0) / det;
        let plane: [f64; 3] = std::array::from_fn(|i| l0 * r0[i] + l1 * r1[i]);

        let r_sq = dot(&plane, &plane);
        let u: [f64; 3] = if r_sq >= 1.0 {
            let r = r_sq.sqrt();
            plane.map(|p| p / r)
        } else {
            let lift = (1.0 - r_sq).sqrt();
            std::array::from_fn(|i| plane[i] + lift * normal[i])
        };
        seed = (
            u[1].atan2(u[0]).to_degrees(),
            u[2].clamp(-1.0, 1.0).asin().to_degrees(),
        );

        let point = GeoPoint::deterministic(seed.0, seed.1, 0.0, 0.0, ctx.config.relativistic);
        let c = point.components();
        higher = [c[3], c[4], c[5]];
        let curvature = ctx.curvature(seed.0, seed.1);
        z_scale = 1.0 + 0.01 * dot(&basis[2], c) * (1.0 + 0.01 * curvature * 2f64.sin());
        y_scale = 1.0 + 0.01 * curvature * 1f64.sin();
    }
    Some(seed)
}
