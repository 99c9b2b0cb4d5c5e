//! Unprojection, including refinement.

use criterion::{black_box, BenchmarkId, Criterion};
use hyperspatial_projection::{ProjectionMode, DEFAULT_ITERATIONS};

use super::config::SAMPLE_POINT;
use super::generators::engine;

pub fn bench_inverse_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");
    let (lon, lat) = SAMPLE_POINT;

    for mode in ProjectionMode::ALL {
        let engine = engine(mode, false);
        let p = engine.project_to_screen(lon, lat, 0.0, 0.0, None);
        group.bench_with_input(BenchmarkId::new("unproject_from_screen", mode.code()), &p, |b, p| {
            b.iter(|| {
                engine.unproject_from_screen(black_box(p.x), black_box(p.y), None, DEFAULT_ITERATIONS)
            })
        });
    }

    group.finish();
}
