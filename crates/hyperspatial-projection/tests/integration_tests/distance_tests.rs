//! Distance metric properties.

use hyperspatial_projection::{GeoCoordinate, HyperspatialEngine, ProjectionConfig};

use crate::common::fixtures::generate_coordinates;

#[test]
fn test_distance_to_self_is_zero() {
    let engine = HyperspatialEngine::default();
    for coord in generate_coordinates(50) {
        assert_eq!(engine.hyperspatial_distance(&coord, &coord), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let engine = HyperspatialEngine::new(ProjectionConfig {
        relativistic: true,
        ..Default::default()
    })
    .expect("valid config");
    let coords = generate_coordinates(20);
    for pair in coords.windows(2) {
        let (a, b) = (pair[0].with_time_offset(3.0), pair[1].with_time_offset(-8.0));
        assert_eq!(engine.hyperspatial_distance(&a, &b), engine.hyperspatial_distance(&b, &a));
    }
}

#[test]
fn test_one_degree_on_equator() {
    let engine = HyperspatialEngine::default();
    let d = engine.hyperspatial_distance(&GeoCoordinate::new(0.0, 0.0), &GeoCoordinate::new(1.0, 0.0));
    // a·π/180 plus a small component-4 term
    assert!((d - 111_319.49).abs() < 50.0, "distance {}", d);
}

#[test]
fn test_relativistic_adds_temporal_term() {
    let plain = HyperspatialEngine::default();
    let relativistic = HyperspatialEngine::new(ProjectionConfig {
        relativistic: true,
        ..Default::default()
    })
    .expect("valid config");
    let a = GeoCoordinate::new(3.0, 4.0);
    let b = GeoCoordinate::new(3.0, 4.0).with_time_offset(1.0e9);
    assert!(relativistic.hyperspatial_distance(&a, &b) > plain.hyperspatial_distance(&a, &b));
}
