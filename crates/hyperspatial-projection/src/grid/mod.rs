//! Grid generation and point-field warping.
//!
//! Both utilities work in plain degrees. Adaptive grids read curvature
//! through the shared field cache; warping is purely geometric.


use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::ProjectionContext;
use crate::error::{ProjectionError, ProjectionResult};
use crate::point::{haversine_angle, wrap_longitude, GeoCoordinate};

/// Fraction of the weighted distance a warped point moves towards the centre.
const WARP_PULL: f64 = 0.5;

/// Amplitude of the adaptive index perturbation.
const ADAPTIVE_AMPLITUDE: f64 = 0.1;

/// Largest lattice [`generate_hypergrid`] will build.
pub const MAX_GRID_POINTS: usize = 1 << 24;

/// Inclusive longitude/latitude rectangle, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl GridBounds {
    /// Checked constructor.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when a bound is non-finite or a minimum exceeds
    /// its maximum.
    pub fn new(min_lon: f64, max_lon: f64, min_lat: f64, max_lat: f64) -> ProjectionResult<Self> {
        let bounds = Self {
            min_lon,
            max_lon,
            min_lat,
            max_lat,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> ProjectionResult<()> {
        let all = [self.min_lon, self.max_lon, self.min_lat, self.max_lat];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(ProjectionError::InvalidArgument(format!(
                "grid bounds must be finite, got {:?}",
                self
            )));
        }
        if self.min_lon > self.max_lon || self.min_lat > self.max_lat {
            return Err(ProjectionError::InvalidArgument(format!(
                "grid bounds are inverted: lon [{}, {}], lat [{}, {}]",
                self.min_lon, self.max_lon, self.min_lat, self.max_lat
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Number of samples along a span: at least two, so both edges appear.
fn sample_count(span: f64, resolution: f64) -> ProjectionResult<usize> {
    let steps = (span / resolution).ceil();
    if steps > MAX_GRID_POINTS as f64 {
        return Err(ProjectionError::InvalidArgument(format!(
            "grid resolution {} gives {} samples over a {} degree span (limit {})",
            resolution, steps, span, MAX_GRID_POINTS
        )));
    }
    Ok((steps as usize).max(2))
}

/// Lattice of (lon, lat) samples, longitude-major.
///
/// With `adaptive`, each sample index is stretched by
/// 1 + 0.1·sin(0.1·curvature) at the uniform sample before interpolation,
/// and the result is clamped to the bounds.
///
/// # Errors
///
/// `InvalidArgument` for invalid bounds, a non-positive resolution, or a
/// lattice larger than [`MAX_GRID_POINTS`].
pub fn generate_hypergrid(
    bounds: &GridBounds,
    base_resolution: f64,
    adaptive: bool,
    ctx: &ProjectionContext<'_>,
) -> ProjectionResult<Vec<(f64, f64)>> {
    bounds.validate()?;
    if !(base_resolution.is_finite() && base_resolution > 0.0) {
        return Err(ProjectionError::InvalidArgument(format!(
            "grid resolution must be positive and finite, got {}",
            base_resolution
        )));
    }

    let lon_steps = sample_count(bounds.lon_span(), base_resolution)?;
    let lat_steps = sample_count(bounds.lat_span(), base_resolution)?;
    let total = lon_steps
        .checked_mul(lat_steps)
        .filter(|&n| n <= MAX_GRID_POINTS)
        .ok_or_else(|| {
            ProjectionError::InvalidArgument(format!(
                "grid of {} x {} samples exceeds the limit of {} points",
                lon_steps, lat_steps, MAX_GRID_POINTS
            ))
        })?;
    let lon_at = |k: f64| bounds.min_lon + bounds.lon_span() * k / (lon_steps - 1) as f64;
    let lat_at = |k: f64| bounds.min_lat + bounds.lat_span() * k / (lat_steps - 1) as f64;

    let mut grid = Vec::with_capacity(total);
    for i in 0..lon_steps {
        for j in 0..lat_steps {
            let (fi, fj) = (i as f64, j as f64);
            let (lon, lat) = (lon_at(fi), lat_at(fj));
            if !adaptive {
                grid.push((lon, lat));
                continue;
            }
            let stretch = 1.0 + ADAPTIVE_AMPLITUDE * (ctx.curvature(lon, lat) * 0.1).sin();
            grid.push((
                lon_at(fi * stretch).clamp(bounds.min_lon, bounds.max_lon),
                lat_at(fj * stretch).clamp(bounds.min_lat, bounds.max_lat),
            ));
        }
    }

    debug!(lon_steps, lat_steps, adaptive, points = grid.len(), "Generated hypergrid");
    Ok(grid)
}

/// Pull points towards `centre` with a Gaussian falloff.
///
/// Weight `w = clamp(intensity·exp(−(d/falloff)²), −1, 1)` where `d` is the
/// great-circle separation in degrees; each point moves `0.5·w` of the way
/// to the centre (negative intensity pushes away). Longitude differences
/// take the short way round; latitude is clamped and longitude wrapped.
/// Altitude and temporal offset are preserved.
///
/// # Errors
///
/// `InvalidArgument` when `falloff_deg` is not positive and finite, or
/// `intensity` is not finite.
pub fn warp_point_field(
    points: &[GeoCoordinate],
    centre: (f64, f64),
    intensity: f64,
    falloff_deg: f64,
) -> ProjectionResult<Vec<GeoCoordinate>> {
    if !(falloff_deg.is_finite() && falloff_deg > 0.0) {
        return Err(ProjectionError::InvalidArgument(format!(
            "warp falloff must be positive and finite, got {}",
            falloff_deg
        )));
    }
    if !intensity.is_finite() {
        return Err(ProjectionError::InvalidArgument(format!(
            "warp intensity must be finite, got {}",
            intensity
        )));
    }

    let (centre_lon, centre_lat) = centre;
    let warped = points
        .iter()
        .map(|p| {
            let d = haversine_angle(p.lon, p.lat, centre_lon, centre_lat).to_degrees();
            let weight = (intensity * (-(d / falloff_deg).powi(2)).exp()).clamp(-1.0, 1.0);
            let pull = WARP_PULL * weight;

            let d_lon = wrap_longitude(centre_lon - p.lon);
            let d_lat = centre_lat - p.lat;
            GeoCoordinate {
                lon: wrap_longitude(p.lon + pull * d_lon),
                lat: (p.lat + pull * d_lat).clamp(-90.0, 90.0),
                ..*p
            }
        })
        .collect();
    Ok(warped)
}
