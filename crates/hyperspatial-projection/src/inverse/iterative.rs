//! Damped Newton refinement against the noise-free forward model.

use tracing::{debug, trace, warn};

use crate::config::ProjectionMode;
use crate::constants::CONVERGENCE_TOLERANCE;
use crate::context::ProjectionContext;
use crate::forward::{project_point, PlanarPoint};
use crate::point::{wrap_longitude, GeoPoint};

/// Forward-difference step, degrees.
const JACOBIAN_STEP: f64 = 1e-6;

/// Below this |det J| the gradient direction replaces the Newton step.
const JACOBIAN_DET_FLOOR: f64 = 1e-18;

/// Largest correction applied to either coordinate in one step, degrees.
const MAX_CORRECTION: f64 = 30.0;

fn forward(
    mode: ProjectionMode,
    lon: f64,
    lat: f64,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> PlanarPoint {
    let point = GeoPoint::new(lon, lat, 0.0, 0.0, ctx);
    project_point(mode, &point, reference, ctx)
}

/// Planar distance between (x, y) and the noise-free projection of `guess`.
pub fn planar_residual(
    mode: ProjectionMode,
    x: f64,
    y: f64,
    guess: (f64, f64),
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> f64 {
    let clean = ctx.without_jitter();
    forward(mode, guess.0, guess.1, reference, &clean).distance_to(&PlanarPoint::new(x, y))
}

/// Refine `start` until its projection lands on (x, y).
///
/// Each iteration solves J·δ = error with a forward-difference Jacobian,
/// clamps δ to ±30° and scales it by 1/(1 + i/5).
pub(super) fn refine(
    mode: ProjectionMode,
    x: f64,
    y: f64,
    start: (f64, f64),
    reference: Option<&GeoPoint>,
    iterations: usize,
    ctx: &ProjectionContext<'_>,
) -> (f64, f64) {
    let clean = ctx.without_jitter();
    let (mut lon, mut lat) = start;
    let mut error = f64::INFINITY;

    for i in 0..iterations {
        let here = forward(mode, lon, lat, reference, &clean);
        let (ex, ey) = (x - here.x, y - here.y);
        error = ex.hypot(ey);
        if error < CONVERGENCE_TOLERANCE {
            debug!(%mode, iterations = i, error, "Inverse refinement converged");
            return (lon, lat);
        }

        let east = forward(mode, lon + JACOBIAN_STEP, lat, reference, &clean);
        let north = forward(mode, lon, lat + JACOBIAN_STEP, reference, &clean);
        let j11 = (east.x - here.x) / JACOBIAN_STEP;
        let j21 = (east.y - here.y) / JACOBIAN_STEP;
        let j12 = (north.x - here.x) / JACOBIAN_STEP;
        let j22 = (north.y - here.y) / JACOBIAN_STEP;

        let det = j11 * j22 - j12 * j21;
        let (d_lon, d_lat) = if det.abs() < JACOBIAN_DET_FLOOR {
            (j11 * ex + j21 * ey, j12 * ex + j22 * ey)
        } else {
            ((j22 * ex - j12 * ey) / det, (j11 * ey - j21 * ex) / det)
        };

        let step = 1.0 / (1.0 + i as f64 / 5.0);
        let d_lon = d_lon.clamp(-MAX_CORRECTION, MAX_CORRECTION) * step;
        let d_lat = d_lat.clamp(-MAX_CORRECTION, MAX_CORRECTION) * step;
        trace!(iteration = i, error, lon, lat, d_lon, d_lat, "Refinement step");

        lon = wrap_longitude(lon + d_lon);
        lat = (lat + d_lat).clamp(-90.0, 90.0);
    }

    let final_error = forward(mode, lon, lat, reference, &clean).distance_to(&PlanarPoint::new(x, y));
    if final_error < CONVERGENCE_TOLERANCE {
        debug!(%mode, iterations, error = final_error, "Inverse refinement converged");
    } else {
        warn!(
            %mode,
            iterations,
            error = final_error,
            last_step_error = error,
            "Inverse refinement exhausted its budget"
        );
    }
    (lon, lat)
}
