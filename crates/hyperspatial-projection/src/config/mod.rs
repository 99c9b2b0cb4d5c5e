//! Engine configuration.
//!
//! - [`ProjectionMode`]: the six projection algorithms and their constants
//! - [`ProjectionConfig`]: mode plus feature toggles, validated fail-fast

mod mode;
mod projection;

pub use self::mode::ProjectionMode;
pub use self::projection::ProjectionConfig;
