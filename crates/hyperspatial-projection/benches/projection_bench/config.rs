//! Benchmark parameters.

/// Batch sizes straddling the default parallel threshold of 100.
pub const BATCH_SIZES: &[usize] = &[64, 256, 4_096];

/// Field resolutions, degrees.
pub const RESOLUTIONS: &[f64] = &[0.1, 1.0];

/// Sample point inside every mode's invertible region.
pub const SAMPLE_POINT: (f64, f64) = (10.0, 50.0);
