//! Batch projection ordering, fan-out and jitter.

use hyperspatial_projection::{GeoCoordinate, HyperspatialEngine, ProjectionConfig, ProjectionMode};

use crate::common::fixtures::generate_coordinates;
use crate::common::helpers::engine_for;

#[test]
fn test_parallel_batch_equals_sequential() {
    let coords = generate_coordinates(150);
    for mode in ProjectionMode::ALL {
        let parallel = engine_for(mode);
        let sequential = HyperspatialEngine::new(ProjectionConfig {
            mode,
            parallel: false,
            ..Default::default()
        })
        .expect("valid config");
        let a = parallel.batch_project(&coords, 0.0, None);
        let b = sequential.batch_project(&coords, 0.0, None);
        assert_eq!(a.len(), 150);
        assert_eq!(a, b, "mode {}", mode);
    }
}

#[test]
fn test_batch_preserves_order() {
    let coords = generate_coordinates(300);
    let engine = engine_for(ProjectionMode::HyperMercator);
    let all = engine.batch_project(&coords, 0.0, None);
    for (i, coord) in coords.iter().enumerate().step_by(37) {
        let single = engine.batch_project(std::slice::from_ref(coord), 0.0, None);
        assert_eq!(single[0], all[i]);
    }
}

#[test]
fn test_sequential_quantum_batch_reproducible_with_same_seed() {
    let coords = generate_coordinates(40);
    let run = || {
        let engine = HyperspatialEngine::new(ProjectionConfig {
            quantum_correction: true,
            parallel: false,
            seed: 2024,
            ..Default::default()
        })
        .expect("valid config");
        engine.batch_project(&coords, 0.0, None)
    };
    assert_eq!(run(), run());
}

#[test]
fn test_quantum_jitter_is_small() {
    let coords = generate_coordinates(40);
    let clean = engine_for(ProjectionMode::HyperMercator).batch_project(&coords, 0.0, None);
    let jittered = HyperspatialEngine::new(ProjectionConfig {
        quantum_correction: true,
        ..Default::default()
    })
    .expect("valid config")
    .batch_project(&coords, 0.0, None);
    for (c, j) in clean.iter().zip(jittered.iter()) {
        assert!(c.distance_to(j) < 1e-7);
    }
    assert_ne!(clean, jittered);
}

#[test]
fn test_batch_reference_and_time_offset_reach_every_point() {
    let coords = generate_coordinates(150);
    let reference = Some(GeoCoordinate::new(-20.0, 35.0));
    for mode in ProjectionMode::ALL {
        let parallel = engine_for(mode);
        let sequential = HyperspatialEngine::new(ProjectionConfig {
            mode,
            parallel: false,
            ..Default::default()
        })
        .expect("valid config");

        let plain = parallel.batch_project(&coords, 0.0, None);
        let centred = parallel.batch_project(&coords, 0.0, reference);
        assert_ne!(plain, centred, "mode {}", mode);
        assert_eq!(centred, sequential.batch_project(&coords, 0.0, reference), "mode {}", mode);

        let later = parallel.batch_project(&coords, 5.0e5, reference);
        assert_ne!(centred, later, "mode {}", mode);
        assert!(centred.iter().zip(later.iter()).all(|(a, b)| a.distance_to(b) < 1e-2));
    }
}
