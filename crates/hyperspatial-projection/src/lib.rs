//! Multi-Mode Hyperspatial Projection Engine
//!
//! Maps geographic coordinates (longitude, latitude, altitude, temporal
//! offset) to 2-D planar display coordinates through six projection modes,
//! and maps planar coordinates back. Points are lifted into a 6-D
//! hypervector, transformed by a mode-specific strategy, and reduced to
//! (x, y).
//!
//! # Architecture
//!
//! - **config**: Projection modes and engine configuration
//! - **error**: `ProjectionError` and the `ProjectionResult` alias
//! - **jitter**: Seeded random source for quantum-correction noise
//! - **point**: `GeoPoint` hypervector model and the distance metric
//! - **field**: Curvature and tensor field evaluation with caching
//! - **matrix**: 6×6 projection matrices, inversion and per-mode builders
//! - **forward**: Six forward strategies and planar extraction
//! - **inverse**: Closed-form and iterative inversion
//! - **grid**: Adaptive grid generation and point-field warping
//! - **engine**: `HyperspatialEngine`, the shared entry point
//!
//! The "relativistic" and "quantum" names denote deterministic and
//! stochastic correction terms, not physical models.
//!
//! # Example
//!
//! ```
//! use hyperspatial_projection::{HyperspatialEngine, ProjectionConfig, ProjectionMode};
//!
//! let engine = HyperspatialEngine::new(ProjectionConfig::with_mode(ProjectionMode::HeisenbergStereographic))
//!     .expect("valid config");
//! let p = engine.project_to_screen(10.0, 20.0, 0.0, 0.0, None);
//! let (lon, lat) = engine
//!     .unproject_from_screen(p.x, p.y, None, 50)
//!     .expect("finite input")
//!     .coordinates();
//! assert!((lon - 10.0).abs() < 1e-3 && (lat - 20.0).abs() < 1e-3);
//! ```

pub mod config;
pub mod constants;
pub mod context;
pub mod engine;
pub mod error;
pub mod field;
pub mod forward;
pub mod grid;
pub mod inverse;
pub mod jitter;
pub mod matrix;
pub mod point;

// Re-exports for convenience
pub use config::{ProjectionConfig, ProjectionMode};
pub use constants::DEFAULT_ITERATIONS;
pub use engine::HyperspatialEngine;
pub use error::{ProjectionError, ProjectionResult};
pub use field::CacheStats;
pub use forward::PlanarPoint;
pub use grid::GridBounds;
pub use inverse::Unprojected;
pub use jitter::{JitterSource, SeededJitter, ZeroJitter};
pub use point::{GeoCoordinate, GeoPoint};
