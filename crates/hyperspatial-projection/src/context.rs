//! Per-call evaluation context.
//!
//! A context is a read-only snapshot of everything a strategy needs: the
//! configuration (read once per call), the shared field cache, and an
//! optional handle to the jitter source. Strategies never reach for global
//! state.

use parking_lot::Mutex;

use crate::config::ProjectionConfig;
use crate::constants::TENSOR_DIM;
use crate::field::FieldCache;
use crate::jitter::JitterSource;

/// Shared, lockable jitter source.
pub type SharedJitter = Mutex<Box<dyn JitterSource>>;

/// Snapshot handed to every point, matrix, forward and inverse routine.
#[derive(Clone, Copy)]
pub struct ProjectionContext<'a> {
    pub config: &'a ProjectionConfig,
    pub fields: &'a FieldCache,
    jitter: Option<&'a SharedJitter>,
}

impl<'a> ProjectionContext<'a> {
    pub fn new(config: &'a ProjectionConfig, fields: &'a FieldCache, jitter: &'a SharedJitter) -> Self {
        Self {
            config,
            fields,
            jitter: Some(jitter),
        }
    }

    /// Context that never draws jitter, whatever the configuration says.
    pub fn noise_free(config: &'a ProjectionConfig, fields: &'a FieldCache) -> Self {
        Self {
            config,
            fields,
            jitter: None,
        }
    }

    /// Same snapshot with jitter disabled.
    pub fn without_jitter(&self) -> Self {
        Self {
            jitter: None,
            ..*self
        }
    }

    /// True when quantum correction is on and a source is attached.
    #[inline]
    pub fn quantum_enabled(&self) -> bool {
        self.config.quantum_correction && self.jitter.is_some()
    }

    /// N(0, 1) draw, or 0.0 when quantum correction is inactive.
    #[inline]
    pub fn gaussian(&self) -> f64 {
        match self.jitter {
            Some(source) if self.config.quantum_correction => source.lock().standard_normal(),
            _ => 0.0,
        }
    }

    /// Curvature at (lon, lat) under the current resolution.
    #[inline]
    pub fn curvature(&self, lon: f64, lat: f64) -> f64 {
        self.fields.curvature(lon, lat, self.config.tensor_resolution)
    }

    /// Tensor field vector at (lon, lat) under the current resolution.
    #[inline]
    pub fn field_vector(&self, lon: f64, lat: f64) -> [f64; TENSOR_DIM] {
        self.fields.field_vector(lon, lat, self.config.tensor_resolution)
    }
}
