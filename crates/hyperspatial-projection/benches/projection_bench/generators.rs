//! Deterministic benchmark inputs.

use hyperspatial_projection::{GeoCoordinate, HyperspatialEngine, ProjectionConfig, ProjectionMode};

/// `n` coordinates on a golden-angle spiral.
pub fn generate_coordinates(n: usize) -> Vec<GeoCoordinate> {
    let golden_angle = 137.507_764_050_037_85_f64;
    (0..n)
        .map(|i| {
            let f = i as f64;
            let lon = (f * golden_angle) % 360.0 - 180.0;
            let lat = -80.0 + 160.0 * (f + 0.5) / n as f64;
            GeoCoordinate::new(lon, lat).with_altitude(f % 1_000.0)
        })
        .collect()
}

pub fn engine(mode: ProjectionMode, parallel: bool) -> HyperspatialEngine {
    HyperspatialEngine::new(ProjectionConfig {
        mode,
        parallel,
        ..Default::default()
    })
    .expect("default config is valid")
}
