//! Field and curvature evaluation with memoisation.
//!
//! Both functions are deterministic in (configuration, coordinates). The
//! caches are keyed by the raw coordinate bits only, so the owning engine
//! clears them whenever its configuration changes.
//!
//! # Mathematics
//!
//! Coordinates are first snapped to the `tensor_resolution` grid
//! (λs, φs). With W² = 1 − e²·sin²φs:
//!
//! - curvature(λ, φ) = W⁴ / (1 − e²) · (1 + 0.001·sin(2λs)·cosφs)
//!   (Gaussian curvature of the ellipsoid normalised by a², ≈ 1)
//! - field(λ, φ)[k] = 1 + 0.05·curvature·sin((k+1)λs)·cos((k+1)φs)

mod cache;


pub use self::cache::{CacheStats, FieldCache};

use crate::constants::{ECCENTRICITY_SQ, TENSOR_DIM};

/// Snap a coordinate (degrees) to the nearest multiple of `resolution`.
#[inline]
pub fn snap_to_resolution(value: f64, resolution: f64) -> f64 {
    (value / resolution).round() * resolution
}

/// Uncached curvature evaluation.
pub fn compute_curvature(lon: f64, lat: f64, resolution: f64) -> f64 {
    let lambda = snap_to_resolution(lon, resolution).to_radians();
    let phi = snap_to_resolution(lat, resolution).to_radians();
    let w_sq = 1.0 - ECCENTRICITY_SQ * phi.sin().powi(2);
    w_sq * w_sq / (1.0 - ECCENTRICITY_SQ) * (1.0 + 0.001 * (2.0 * lambda).sin() * phi.cos())
}

/// Uncached field evaluation, given the curvature at the same location.
pub fn compute_field(lon: f64, lat: f64, resolution: f64, curvature: f64) -> [f64; TENSOR_DIM] {
    let lambda = snap_to_resolution(lon, resolution).to_radians();
    let phi = snap_to_resolution(lat, resolution).to_radians();
    let mut field = [0.0; TENSOR_DIM];
    for (k, f) in field.iter_mut().enumerate() {
        let harmonic = (k + 1) as f64;
        *f = 1.0 + 0.05 * curvature * (harmonic * lambda).sin() * (harmonic * phi).cos();
    }
    field
}
