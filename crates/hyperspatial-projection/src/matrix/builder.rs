//! Per-mode projection matrix construction.
//!
//! ```text
//! base(i, j)  = sin(i)·cos(j) + 0.05·exp(−i·j/10)
//! with ref:     base(i, j) *= 1 + 0.1·ref_c[i]·ref_c[j]
//!               base(i, i) *= 1 + 0.01·curvature(ref_λ, ref_φ)
//! M(i, j)     = base(i, j) + mode.additive_term(i, j)
//! ```

use once_cell::sync::Lazy;

use super::types::{Matrix6, ProjectionMatrix};
use crate::config::ProjectionMode;
use crate::constants::TENSOR_DIM;
use crate::context::ProjectionContext;
use crate::point::GeoPoint;

static BASE_COEFFICIENTS: Lazy<Matrix6> = Lazy::new(|| {
    let mut table = [[0.0; TENSOR_DIM]; TENSOR_DIM];
    for (i, row) in table.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let (fi, fj) = (i as f64, j as f64);
            *entry = fi.sin() * fj.cos() + 0.05 * (-(fi * fj) / 10.0).exp();
        }
    }
    table
});

/// Shared, read-only base coefficient table.
#[inline]
pub fn base_coefficients() -> &'static Matrix6 {
    &BASE_COEFFICIENTS
}

/// Build the active mode's matrix, optionally warped by a reference point.
pub fn build_projection_matrix(
    mode: ProjectionMode,
    reference: Option<&GeoPoint>,
    ctx: &ProjectionContext<'_>,
) -> ProjectionMatrix {
    let mut rows = *base_coefficients();

    if let Some(reference) = reference {
        let rc = reference.components();
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry *= 1.0 + 0.1 * rc[i] * rc[j];
            }
        }
        let curvature = ctx.curvature(reference.lambda(), reference.phi());
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] *= 1.0 + 0.01 * curvature;
        }
    }

    for (i, row) in rows.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry += mode.additive_term(i, j);
        }
    }

    ProjectionMatrix::new(
        rows,
        mode.curvature_factor(ctx.config.relativistic),
        ctx.config.singularity_threshold,
    )
}
