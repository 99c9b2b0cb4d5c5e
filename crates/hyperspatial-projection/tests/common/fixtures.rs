//! Deterministic test data.

use hyperspatial_projection::{GeoCoordinate, ProjectionMode};

/// Round-trip tolerance, degrees.
pub const ROUND_TRIP_TOLERANCE_DEG: f64 = 1e-3;

/// Reference used by the centred round-trip tests.
pub const REFERENCE: (f64, f64) = (10.0, 40.0);

/// Points near `REFERENCE` that every mode recovers when centred.
pub const NEAR_REFERENCE: [(f64, f64); 3] = [(15.0, 25.0), (5.0, 45.0), (25.0, 50.0)];

/// Points inside each mode's invertible region.
///
/// Gnomonic (B) about the north pole needs the northern hemisphere; the
/// Lambert-style modes (C, D, F) only cover |λ| < 90°.
pub fn sample_points(mode: ProjectionMode) -> &'static [(f64, f64)] {
    match mode {
        ProjectionMode::HyperMercator => &[(10.0, 20.0), (-30.0, 15.0), (45.0, 45.0), (5.0, -50.0)],
        ProjectionMode::QuantumGnomonic => &[(10.0, 60.0), (45.0, 45.0), (80.0, 60.0), (-30.0, 70.0)],
        ProjectionMode::RelativityAdaptedLambert
        | ProjectionMode::TensorAzimuthal
        | ProjectionMode::HilbertSpaceEquidistant => &[(10.0, 20.0), (-30.0, 15.0), (20.0, -10.0)],
        ProjectionMode::HeisenbergStereographic => &[(10.0, 20.0), (-120.0, -40.0), (150.0, 30.0)],
    }
}

/// Longitudes of the two-hemisphere sweep, -80° to 80° every 20°.
pub fn sweep_longitudes() -> impl Iterator<Item = f64> + Clone {
    (-4..=4).map(|i| 20.0 * i as f64)
}

/// Latitudes of the two-hemisphere sweep, -45° to 45° every 15°.
pub fn sweep_latitudes() -> impl Iterator<Item = f64> + Clone {
    (-3..=3).map(|i| 15.0 * i as f64)
}

/// Angular distance from (0°, 0°) past which the orthographic-like modes
/// (D, F) fold onto themselves.
pub const VIEW_LIMB_MARGIN_DEG: f64 = 80.0;

/// LCG so fixtures do not depend on an RNG crate.
#[inline]
pub fn deterministic_hash(seed: u32) -> u32 {
    seed.wrapping_mul(1_103_515_245).wrapping_add(12_345)
}

/// Deterministic value in [0.0, 1.0).
#[inline]
pub fn deterministic_float(seed: u32) -> f64 {
    ((deterministic_hash(seed) >> 16) & 0x7FFF) as f64 / 32_768.0
}

/// `n` coordinates spread over the globe, with altitudes up to 9 km.
pub fn generate_coordinates(n: usize) -> Vec<GeoCoordinate> {
    (0..n as u32)
        .map(|i| {
            let lon = -180.0 + 360.0 * deterministic_float(i * 3);
            let lat = -85.0 + 170.0 * deterministic_float(i * 3 + 1);
            let alt = 9_000.0 * deterministic_float(i * 3 + 2);
            GeoCoordinate::new(lon, lat).with_altitude(alt)
        })
        .collect()
}
