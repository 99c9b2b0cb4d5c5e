//! Sentinels, singular matrices and degenerate geometry.

use hyperspatial_projection::matrix::ProjectionMatrix;
use hyperspatial_projection::{
    HyperspatialEngine, ProjectionConfig, ProjectionError, ProjectionMode, Unprojected,
};

use crate::common::helpers::engine_for;

#[test]
fn test_zero_diagonal_matrix_is_near_singular() {
    let mut rows = [[1.0; 6]; 6];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    let err = ProjectionMatrix::from_rows(rows).invert().expect_err("zero diagonal");
    assert!(matches!(err, ProjectionError::NearSingularMatrix { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_lambert_out_of_domain_sentinel() {
    let engine = engine_for(ProjectionMode::RelativityAdaptedLambert);
    let out = engine
        .unproject_from_screen(1.0, 1.0, None, 50)
        .expect("finite input");
    assert_eq!(out, Unprojected::OutOfDomain);
    assert_eq!(out.coordinates(), (0.0, 0.0));
}

#[test]
fn test_hilbert_falls_back_when_singular() {
    let engine = HyperspatialEngine::new(ProjectionConfig {
        mode: ProjectionMode::HilbertSpaceEquidistant,
        singularity_threshold: 10.0,
        ..Default::default()
    })
    .expect("valid config");
    let p = engine.project_to_screen(10.0, 20.0, 0.0, 0.0, None);
    let (lon, lat) = engine
        .unproject_from_screen(p.x, p.y, None, 50)
        .expect("fallback, not an error")
        .coordinates();
    assert!((lon - 10.0).abs() < 1e-3 && (lat - 20.0).abs() < 1e-3);
}

#[test]
fn test_gnomonic_pole_returns_finite_output() {
    let engine = engine_for(ProjectionMode::QuantumGnomonic);
    let p = engine.project_to_screen(0.0, 90.0, 0.0, 0.0, None);
    assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn test_gnomonic_equator_returns_bounded_output() {
    let engine = engine_for(ProjectionMode::QuantumGnomonic);
    for lon in [0.0, 10.0, 90.0] {
        let p = engine.project_to_screen(lon, 0.0, 0.0, 0.0, None);
        assert!(p.x.is_finite() && p.y.is_finite());
        assert!(p.x.abs() < 10.0 && p.y.abs() < 10.0, "({}, 0) went to {:?}", lon, p);
    }
}

#[test]
fn test_zero_iteration_budget_rejected() {
    let engine = engine_for(ProjectionMode::TensorAzimuthal);
    assert!(matches!(
        engine.unproject_from_screen(0.1, 0.1, None, 0),
        Err(ProjectionError::InvalidArgument(_))
    ));
}

#[test]
fn test_iterative_budget_of_one_still_returns() {
    let engine = engine_for(ProjectionMode::TensorAzimuthal);
    let out = engine
        .unproject_from_screen(0.05, 0.05, None, 1)
        .expect("finite input");
    let (lon, lat) = out.coordinates();
    assert!(lon.is_finite() && (-90.0..=90.0).contains(&lat));
}

#[test]
fn test_extreme_latitude_projection_is_finite_for_stereographic() {
    let engine = engine_for(ProjectionMode::HeisenbergStereographic);
    let p = engine.project_to_screen(45.0, 89.9, 0.0, 0.0, None);
    assert!(p.x.is_finite() && p.y.is_finite());
}
