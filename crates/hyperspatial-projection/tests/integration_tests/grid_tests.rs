//! Grid generation and warping through the engine.

use hyperspatial_projection::{GeoCoordinate, GridBounds, HyperspatialEngine, ProjectionError};

#[test]
fn test_two_by_two_lattice() {
    let engine = HyperspatialEngine::default();
    let bounds = GridBounds::new(0.0, 10.0, 0.0, 10.0).expect("valid bounds");
    let grid = engine.generate_hypergrid(&bounds, 10.0, false).expect("valid grid");
    assert_eq!(grid, vec![(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (10.0, 10.0)]);
}

#[test]
fn test_five_degree_resolution_lattice() {
    let engine = HyperspatialEngine::default();
    let bounds = GridBounds::new(0.0, 10.0, 0.0, 10.0).expect("valid bounds");
    let grid = engine.generate_hypergrid(&bounds, 5.0, false).expect("valid grid");
    assert_eq!(grid, vec![(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (10.0, 10.0)]);
}

#[test]
fn test_tiny_resolution_is_an_error() {
    let engine = HyperspatialEngine::default();
    let bounds = GridBounds::new(0.0, 10.0, 0.0, 10.0).expect("valid bounds");
    let err = engine.generate_hypergrid(&bounds, 1e-300, false).unwrap_err();
    assert!(matches!(err, ProjectionError::InvalidArgument(_)));
}

#[test]
fn test_adaptive_grid_within_bounds() {
    let engine = HyperspatialEngine::default();
    let bounds = GridBounds::new(-30.0, 30.0, 20.0, 60.0).expect("valid bounds");
    let grid = engine.generate_hypergrid(&bounds, 5.0, true).expect("valid grid");
    assert_eq!(grid.len(), 12 * 8);
    assert!(grid
        .iter()
        .all(|&(lon, lat)| (-30.0..=30.0).contains(&lon) && (20.0..=60.0).contains(&lat)));
    assert!(engine.cache_stats().curvature_entries > 0);
}

#[test]
fn test_grid_rejects_zero_resolution() {
    let engine = HyperspatialEngine::default();
    let bounds = GridBounds::new(0.0, 1.0, 0.0, 1.0).expect("valid bounds");
    assert!(matches!(
        engine.generate_hypergrid(&bounds, 0.0, true),
        Err(ProjectionError::InvalidArgument(_))
    ));
}

#[test]
fn test_warp_preserves_count_and_altitude() {
    let engine = HyperspatialEngine::default();
    let points: Vec<_> = (0..20)
        .map(|i| GeoCoordinate::new(i as f64, -(i as f64)).with_altitude(100.0 * i as f64))
        .collect();
    let warped = engine
        .warp_point_field(&points, 5.0, -5.0, 1.0, 10.0)
        .expect("valid falloff");
    assert_eq!(warped.len(), points.len());
    for (before, after) in points.iter().zip(warped.iter()) {
        assert_eq!(before.alt, after.alt);
        let d_before = (before.lon - 5.0).hypot(before.lat + 5.0);
        let d_after = (after.lon - 5.0).hypot(after.lat + 5.0);
        assert!(d_after <= d_before + 1e-12);
    }
}
