//! GeoPoint construction and the hyperspatial distance metric.

use super::types::{GeoCoordinate, GeoPoint};
use crate::constants::{
    BASE_UNCERTAINTY, EARTH_GM, JITTER_SCALE, SEMI_MAJOR_AXIS, SPEED_OF_LIGHT, UNCERTAINTY_PER_METRE,
};
use crate::context::ProjectionContext;

/// Weights for the component-3..5 deltas in the distance metric.
const HIGHER_DIM_WEIGHTS: [f64; 3] = [1.0, 0.5, 0.25];

/// Scale of the higher-dimensional distance term (metres per unit).
const HIGHER_DIM_SCALE: f64 = SEMI_MAJOR_AXIS * 1e-6;

/// Scale of the temporal distance term.
const TEMPORAL_SCALE: f64 = SPEED_OF_LIGHT * 1e-12;

impl GeoPoint {
    /// Build a point from raw input, drawing jitter when the context has
    /// quantum correction enabled.
    pub fn new(lon: f64, lat: f64, alt: f64, t_offset: f64, ctx: &ProjectionContext<'_>) -> Self {
        let quantum = ctx.quantum_enabled();
        Self::build(lon, lat, alt, t_offset, ctx.config.relativistic, || {
            if quantum {
                ctx.gaussian()
            } else {
                0.0
            }
        })
    }

    #[inline]
    pub fn from_coordinate(coord: &GeoCoordinate, ctx: &ProjectionContext<'_>) -> Self {
        Self::new(coord.lon, coord.lat, coord.alt, coord.t_offset, ctx)
    }

    /// Reference points are never jittered.
    #[inline]
    pub fn reference(coord: &GeoCoordinate, ctx: &ProjectionContext<'_>) -> Self {
        Self::deterministic(coord.lon, coord.lat, coord.alt, coord.t_offset, ctx.config.relativistic)
    }

    /// Jitter-free construction.
    pub fn deterministic(lon: f64, lat: f64, alt: f64, t_offset: f64, relativistic: bool) -> Self {
        Self::build(lon, lat, alt, t_offset, relativistic, || 0.0)
    }

    /// Core constructor. `noise` yields one N(0, 1) sample per component.
    pub fn build(
        lon: f64,
        lat: f64,
        alt: f64,
        t_offset: f64,
        relativistic: bool,
        mut noise: impl FnMut() -> f64,
    ) -> Self {
        let lambda = lon.to_radians();
        let phi = lat.to_radians();
        let (sin_l, cos_l) = lambda.sin_cos();
        let (sin_p, cos_p) = phi.sin_cos();

        let mut components = [
            cos_p * cos_l,
            cos_p * sin_l,
            sin_p,
            alt / SEMI_MAJOR_AXIS,
            0.1 * (2.0 * lambda).sin() * cos_p,
            0.1 * (3.0 * phi).sin() * cos_l + 1e-9 * t_offset,
        ];
        for c in components.iter_mut() {
            *c += noise() * JITTER_SCALE;
        }

        Self {
            lambda: lon,
            phi: lat,
            h: alt,
            t: t_offset,
            uncertainty_radius: uncertainty_radius(alt, relativistic),
            dimensional_components: components,
        }
    }

    /// Hyperspatial distance in metres plus synthetic terms.
    ///
    /// Haversine surface distance on a sphere of radius `a`, combined
    /// orthogonally with the altitude delta, plus a weighted term from the
    /// component 3..5 deltas, plus `|Δt|·c·1e-12` when `relativistic`.
    /// Symmetric, and zero for identical points.
    ///
    /// # Example
    /// ```
    /// use hyperspatial_projection::point::GeoPoint;
    ///
    /// let a = GeoPoint::deterministic(0.0, 0.0, 0.0, 0.0, false);
    /// let b = GeoPoint::deterministic(1.0, 0.0, 0.0, 0.0, false);
    /// let d = a.hyperspatial_distance(&b, false);
    /// assert!((d - 111_319.5).abs() < 50.0);
    /// assert_eq!(a.hyperspatial_distance(&a, false), 0.0);
    /// ```
    pub fn hyperspatial_distance(&self, other: &GeoPoint, relativistic: bool) -> f64 {
        let surface = haversine_metres(self.lambda, self.phi, other.lambda, other.phi);
        let dh = other.h - self.h;
        let spatial = (surface * surface + dh * dh).sqrt();

        let higher: f64 = HIGHER_DIM_WEIGHTS
            .iter()
            .enumerate()
            .map(|(k, w)| {
                let d = other.dimensional_components[3 + k] - self.dimensional_components[3 + k];
                w * d * d
            })
            .sum();
        let mut distance = spatial + HIGHER_DIM_SCALE * higher.sqrt();

        if relativistic {
            distance += (other.t - self.t).abs() * TEMPORAL_SCALE;
        }
        distance
    }
}

/// Uncertainty radius: grows with |altitude| and, when relativistic, with
/// the gravitational potential at that altitude.
fn uncertainty_radius(alt: f64, relativistic: bool) -> f64 {
    let mut radius = BASE_UNCERTAINTY + alt.abs() * UNCERTAINTY_PER_METRE;
    if relativistic {
        let r = (SEMI_MAJOR_AXIS + alt).abs().max(1.0);
        radius *= 1.0 + EARTH_GM / (r * SPEED_OF_LIGHT * SPEED_OF_LIGHT);
    }
    radius.max(0.0)
}

/// Great-circle distance (metres) on a sphere of radius `a`. Inputs in degrees.
pub(crate) fn haversine_metres(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    SEMI_MAJOR_AXIS * haversine_angle(lon1, lat1, lon2, lat2)
}

/// Central angle (radians) between two points given in degrees.
pub(crate) fn haversine_angle(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (p1, p2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = p2 - p1;
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + p1.cos() * p2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Wrap a longitude (degrees) into [−180, 180).
#[inline]
pub(crate) fn wrap_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
