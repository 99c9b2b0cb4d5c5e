//! Matrix batch projection, sequential vs parallel.

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use hyperspatial_projection::ProjectionMode;

use super::config::BATCH_SIZES;
use super::generators::{engine, generate_coordinates};

pub fn bench_batch_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let sequential = engine(ProjectionMode::TensorAzimuthal, false);
    let parallel = engine(ProjectionMode::TensorAzimuthal, true);

    for &size in BATCH_SIZES {
        let coords = generate_coordinates(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &coords, |b, coords| {
            b.iter(|| sequential.batch_project(black_box(coords), 0.0, None))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &coords, |b, coords| {
            b.iter(|| parallel.batch_project(black_box(coords), 0.0, None))
        });
    }

    group.finish();
}
