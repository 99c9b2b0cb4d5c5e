//! GeoPoint and GeoCoordinate type definitions.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::constants::TENSOR_DIM;

/// Raw geographic input as callers supply it.
///
/// Longitude and latitude are in degrees and are NOT range-clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lon: f64,
    pub lat: f64,
    #[serde(default)]
    pub alt: f64,
    #[serde(default)]
    pub t_offset: f64,
}

impl GeoCoordinate {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            lon,
            lat,
            alt: 0.0,
            t_offset: 0.0,
        }
    }

    #[inline]
    pub fn with_altitude(mut self, alt: f64) -> Self {
        self.alt = alt;
        self
    }

    #[inline]
    pub fn with_time_offset(mut self, t_offset: f64) -> Self {
        self.t_offset = t_offset;
        self
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((lon, lat): (f64, f64)) -> Self {
        Self::new(lon, lat)
    }
}

impl From<(f64, f64, f64)> for GeoCoordinate {
    fn from((lon, lat, alt): (f64, f64, f64)) -> Self {
        Self::new(lon, lat).with_altitude(alt)
    }
}

/// Immutable six-dimensional embedding of a geographic point.
///
/// # Invariants
///
/// - exactly [`TENSOR_DIM`] components
/// - `uncertainty_radius >= 0`
/// - equality and hashing compare every field bit-for-bit, -0.0 == 0.0
///
/// # Example
/// ```
/// use hyperspatial_projection::point::GeoPoint;
///
/// let p = GeoPoint::deterministic(0.0, 0.0, 0.0, 0.0, false);
/// assert_eq!(p.components()[0], 1.0);
/// assert_eq!(p.components()[3], 0.0);
/// assert!(p.uncertainty_radius() >= 0.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub(super) lambda: f64,
    pub(super) phi: f64,
    pub(super) h: f64,
    pub(super) t: f64,
    pub(super) uncertainty_radius: f64,
    pub(super) dimensional_components: [f64; TENSOR_DIM],
}

impl GeoPoint {
    /// Longitude (degrees).
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Latitude (degrees).
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Altitude (metres).
    #[inline]
    pub fn altitude(&self) -> f64 {
        self.h
    }

    /// Temporal offset.
    #[inline]
    pub fn time_offset(&self) -> f64 {
        self.t
    }

    #[inline]
    pub fn uncertainty_radius(&self) -> f64 {
        self.uncertainty_radius
    }

    #[inline]
    pub fn components(&self) -> &[f64; TENSOR_DIM] {
        &self.dimensional_components
    }

    /// Longitude and latitude in radians.
    #[inline]
    pub fn radians(&self) -> (f64, f64) {
        (self.lambda.to_radians(), self.phi.to_radians())
    }

    fn key_bits(&self) -> [u64; 5 + TENSOR_DIM] {
        let mut bits = [0u64; 5 + TENSOR_DIM];
        let scalars = [self.lambda, self.phi, self.h, self.t, self.uncertainty_radius];
        for (slot, value) in bits
            .iter_mut()
            .zip(scalars.iter().chain(self.dimensional_components.iter()))
        {
            *slot = canonical_bits(*value);
        }
        bits
    }
}

/// Bit pattern with -0.0 folded into +0.0.
#[inline]
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for GeoPoint {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for GeoPoint {}

impl Hash for GeoPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}
