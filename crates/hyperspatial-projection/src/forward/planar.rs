//! Reduction of a 6-D result vector to planar display coordinates.

use serde::{Deserialize, Serialize};

use crate::config::ProjectionMode;
use crate::constants::TENSOR_DIM;

/// Planar display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another planar point.
    #[inline]
    pub fn distance_to(&self, other: &PlanarPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<PlanarPoint> for (f64, f64) {
    fn from(p: PlanarPoint) -> Self {
        (p.x, p.y)
    }
}

/// x = v[0], y = v[1]; z-scale by 1 + 0.01·v[2]; add 0.001·v[3]·(sin, cos)(v[4]);
/// then the mode's planar scale.
///
/// # Example
/// ```
/// use hyperspatial_projection::config::ProjectionMode;
/// use hyperspatial_projection::forward::extract_planar;
///
/// let p = extract_planar(&[1.0, 2.0, 0.0, 0.0, 0.0, 0.0], ProjectionMode::HyperMercator);
/// assert_eq!((p.x, p.y), (0.5, 1.0));
/// ```
pub fn extract_planar(v: &[f64; TENSOR_DIM], mode: ProjectionMode) -> PlanarPoint {
    let mut x = v[0];
    let mut y = v[1];

    if TENSOR_DIM > 3 {
        let z_scale = 1.0 + 0.01 * v[2];
        x *= z_scale;
        y *= z_scale;
        let (sin_w, cos_w) = v[4].sin_cos();
        x += 0.001 * v[3] * sin_w;
        y += 0.001 * v[3] * cos_w;
    }

    let scale = mode.planar_scale();
    PlanarPoint::new(x * scale, y * scale)
}
