//! Forward-then-inverse recovery for every mode.

use hyperspatial_projection::{GeoCoordinate, ProjectionMode, DEFAULT_ITERATIONS};

use crate::common::fixtures::{
    sample_points, sweep_latitudes, sweep_longitudes, NEAR_REFERENCE, REFERENCE,
    ROUND_TRIP_TOLERANCE_DEG, VIEW_LIMB_MARGIN_DEG,
};
use crate::common::helpers::{assert_coordinates_close, engine_for};

#[test]
fn test_round_trip_every_mode() {
    for mode in ProjectionMode::ALL {
        let engine = engine_for(mode);
        for &(lon, lat) in sample_points(mode) {
            let p = engine.project_to_screen(lon, lat, 0.0, 0.0, None);
            let recovered = engine
                .unproject_from_screen(p.x, p.y, None, DEFAULT_ITERATIONS)
                .expect("finite planar input")
                .coordinates();
            assert_coordinates_close(
                recovered,
                (lon, lat),
                ROUND_TRIP_TOLERANCE_DEG,
                &format!("{} at ({}, {})", mode, lon, lat),
            );
        }
    }
}

#[test]
fn test_round_trip_with_reference_point() {
    let reference = GeoCoordinate::new(REFERENCE.0, REFERENCE.1);
    for mode in ProjectionMode::ALL {
        let engine = engine_for(mode);
        for &(lon, lat) in &NEAR_REFERENCE {
            let p = engine.project_to_screen(lon, lat, 0.0, 0.0, Some(reference));
            let recovered = engine
                .unproject_from_screen(p.x, p.y, Some(reference), DEFAULT_ITERATIONS)
                .expect("finite planar input")
                .coordinates();
            assert_coordinates_close(
                recovered,
                (lon, lat),
                ROUND_TRIP_TOLERANCE_DEG,
                &format!("{} centred at {:?}", mode, REFERENCE),
            );
        }
    }
}

#[test]
fn test_round_trip_sweep_both_hemispheres() {
    let limb = VIEW_LIMB_MARGIN_DEG.to_radians().cos();
    for mode in ProjectionMode::ALL {
        let engine = engine_for(mode);
        // The default pole centre puts the equator on the gnomonic horizon.
        let reference = match mode {
            ProjectionMode::QuantumGnomonic => Some(GeoCoordinate::new(0.0, 0.0)),
            _ => None,
        };
        let folds = matches!(
            mode,
            ProjectionMode::TensorAzimuthal | ProjectionMode::HilbertSpaceEquidistant
        );
        let mut checked = 0;
        for lon in sweep_longitudes() {
            for lat in sweep_latitudes() {
                if folds && lat.to_radians().cos() * lon.to_radians().cos() < limb {
                    continue;
                }
                let p = engine.project_to_screen(lon, lat, 0.0, 0.0, reference);
                let recovered = engine
                    .unproject_from_screen(p.x, p.y, reference, DEFAULT_ITERATIONS)
                    .expect("finite planar input")
                    .coordinates();
                assert_coordinates_close(
                    recovered,
                    (lon, lat),
                    ROUND_TRIP_TOLERANCE_DEG,
                    &format!("{} sweep at ({}, {})", mode, lon, lat),
                );
                checked += 1;
            }
        }
        assert!(checked >= 51, "{} only checked {} points", mode, checked);
    }
}

#[test]
fn test_round_trip_hilbert_other_seeds() {
    for seed in [1_u64, 7, 1234, 99_999] {
        let engine = engine_for(ProjectionMode::HilbertSpaceEquidistant);
        engine
            .configure("HILBERT_SPACE_EQUIDISTANT", false, 1.0, false, true, seed)
            .expect("valid configuration");
        let p = engine.project_to_screen(20.0, -10.0, 0.0, 0.0, None);
        let recovered = engine
            .unproject_from_screen(p.x, p.y, None, DEFAULT_ITERATIONS)
            .expect("finite planar input")
            .coordinates();
        assert_coordinates_close(
            recovered,
            (20.0, -10.0),
            ROUND_TRIP_TOLERANCE_DEG,
            &format!("seed {}", seed),
        );
    }
}

#[test]
fn test_mercator_origin_projects_to_origin() {
    let p = engine_for(ProjectionMode::HyperMercator).project_to_screen(0.0, 0.0, 0.0, 0.0, None);
    assert!(p.x.abs() < 1e-12, "x = {:e}", p.x);
    assert!(p.y.abs() < 1e-12, "y = {:e}", p.y);
}
