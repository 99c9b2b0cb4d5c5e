//! Benchmark suite for hyperspatial-projection.
//!
//! | Group | Measures |
//! |-------|----------|
//! | forward | single-point projection per mode |
//! | inverse | unprojection per mode (closed form plus refinement) |
//! | batch | matrix batch projection, sequential vs rayon |
//! | field | cached vs uncached curvature and field lookups |
//!
//! ```bash
//! cargo bench --package hyperspatial-projection
//! cargo bench --package hyperspatial-projection -- batch
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod config;
mod generators;

mod batch_benches;
mod inverse_benches;

criterion_group!(
    name = forward_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = forward_benches::bench_forward_projection
);

criterion_group!(
    name = inverse_bench_group;
    config = Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(5));
    targets = inverse_benches::bench_inverse_projection
);

criterion_group!(
    name = batch_bench_group;
    config = Criterion::default()
        .sample_size(30)
        .measurement_time(Duration::from_secs(5));
    targets = batch_benches::bench_batch_projection
);

criterion_group!(
    name = field_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = field_benches::bench_field_cache
);

criterion_main!(
    forward_bench_group,
    inverse_bench_group,
    batch_bench_group,
    field_bench_group
);
