//! 6×6 projection matrices.
//!
//! # Module Structure
//!
//! - `types`: [`ProjectionMatrix`]
//! - `ops`: multiply, transpose, pseudo-determinant, inversion
//! - `builder`: base coefficient table and per-mode construction

mod builder;
mod ops;
mod types;


pub use self::builder::{base_coefficients, build_projection_matrix};
pub use self::types::{Matrix6, ProjectionMatrix};
