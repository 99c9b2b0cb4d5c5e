//! Configuration validation and cache invalidation.

use hyperspatial_projection::{HyperspatialEngine, ProjectionConfig, ProjectionError, ProjectionMode};

use crate::common::helpers::engine_for;

#[test]
fn test_unknown_mode_rejected_eagerly() {
    let engine = HyperspatialEngine::default();
    let err = engine
        .configure("ROBINSON", false, 1.0, false, true, 42)
        .expect_err("unknown mode must be rejected");
    assert!(matches!(err, ProjectionError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("ROBINSON"));
}

#[test]
fn test_non_positive_resolution_rejected() {
    let engine = HyperspatialEngine::default();
    for res in [0.0, -0.5] {
        let err = engine
            .configure("HYPER_MERCATOR", false, res, false, true, 42)
            .expect_err("resolution must be positive");
        assert!(matches!(err, ProjectionError::InvalidConfiguration(_)));
    }
}

#[test]
fn test_every_mode_code_accepted() {
    let engine = HyperspatialEngine::default();
    for mode in ProjectionMode::ALL {
        engine
            .configure(mode.code(), false, 1.0, false, true, 42)
            .expect("known code");
        assert_eq!(engine.config().mode, mode);
    }
}

#[test]
fn test_caches_cleared_on_configure() {
    let engine = engine_for(ProjectionMode::TensorAzimuthal);
    for i in 0..10 {
        engine.project_to_screen(i as f64, i as f64, 0.0, 0.0, None);
    }
    let before = engine.cache_stats();
    assert_eq!(before.field_entries, 10);
    assert!(before.curvature_entries >= 10);

    engine
        .configure("TENSOR_AZIMUTHAL", false, 5.0, false, true, 42)
        .expect("valid configuration");
    let after = engine.cache_stats();
    assert_eq!(after.field_entries, 0);
    assert_eq!(after.curvature_entries, 0);
}

#[test]
fn test_resolution_change_visible_after_configure() {
    let engine = HyperspatialEngine::default();
    let fine = engine.curvature_at(0.4, 44.6);
    engine
        .configure("HYPER_MERCATOR", false, 10.0, false, true, 42)
        .expect("valid configuration");
    let coarse = engine.curvature_at(0.4, 44.6);
    // 1° snaps to (0, 45); 10° snaps to (0, 40)
    assert_ne!(fine, coarse);
}

#[test]
fn test_json_configuration() {
    let config = ProjectionConfig::from_json(
        r#"{"mode": "QUANTUM_GNOMONIC", "tensor_resolution": 0.25, "seed": 3}"#,
    )
    .expect("valid json");
    let engine = HyperspatialEngine::new(config).expect("valid config");
    let current = engine.config();
    assert_eq!(current.mode, ProjectionMode::QuantumGnomonic);
    assert_eq!(current.tensor_resolution, 0.25);
    assert_eq!(current.seed, 3);
    assert!(current.parallel);

    assert!(ProjectionConfig::from_json(r#"{"tensor_resolution": -1.0}"#).is_err());
    assert!(ProjectionConfig::from_json(r#"{"mode": "NOPE"}"#).is_err());
}
