//! Orthonormal basis for the Hilbert-space strategy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::constants::TENSOR_DIM;
use crate::point::GeoPoint;

/// Salt so the basis stream never coincides with the jitter stream.
const BASIS_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Axis each basis row starts from before perturbation.
const AXIS_FRAME: [usize; TENSOR_DIM] = [1, 2, 0, 3, 4, 5];

/// Amplitude of the seeded perturbation.
const PERTURBATION: f64 = 0.1;

/// Classical Gram-Schmidt on rows, in order. Rows that collapse below
/// `f64::EPSILON` are left as zero vectors.
pub fn gram_schmidt(vectors: &[[f64; TENSOR_DIM]; TENSOR_DIM]) -> [[f64; TENSOR_DIM]; TENSOR_DIM] {
    let mut out = [[0.0; TENSOR_DIM]; TENSOR_DIM];
    for k in 0..TENSOR_DIM {
        let mut w = vectors[k];
        for u in out.iter().take(k) {
            let d: f64 = w.iter().zip(u.iter()).map(|(a, b)| a * b).sum();
            for (wi, ui) in w.iter_mut().zip(u.iter()) {
                *wi -= d * ui;
            }
        }
        let norm = w.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm > f64::EPSILON {
            for wi in w.iter_mut() {
                *wi /= norm;
            }
            out[k] = w;
        }
    }
    out
}

/// Seeded random basis: the axis frame (e1, e2, e0, e3, e4, e5) perturbed by
/// uniform noise of amplitude 0.1 and orthonormalised. A reference point
/// scales column j by 1 + 0.1·ref_c[j] before a second orthonormalisation.
pub fn hilbert_basis(seed: u64, reference: Option<&GeoPoint>) -> [[f64; TENSOR_DIM]; TENSOR_DIM] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ BASIS_SEED_SALT);
    let mut raw = [[0.0; TENSOR_DIM]; TENSOR_DIM];
    for (k, row) in raw.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            let axis = if j == AXIS_FRAME[k] { 1.0 } else { 0.0 };
            *entry = axis + PERTURBATION * rng.gen_range(-1.0..1.0);
        }
    }
    let mut basis = gram_schmidt(&raw);

    if let Some(reference) = reference {
        let rc = reference.components();
        for row in basis.iter_mut() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry *= 1.0 + 0.1 * rc[j];
            }
        }
        basis = gram_schmidt(&basis);
    }
    basis
}
