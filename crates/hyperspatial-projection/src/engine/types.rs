//! Engine state and configuration management.

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::config::ProjectionConfig;
use crate::context::{ProjectionContext, SharedJitter};
use crate::error::ProjectionResult;
use crate::field::{CacheStats, FieldCache};
use crate::jitter::{JitterSource, SeededJitter};

/// Multi-mode projection engine.
///
/// # Example
/// ```
/// use hyperspatial_projection::HyperspatialEngine;
///
/// let engine = HyperspatialEngine::default();
/// let p = engine.project_to_screen(0.0, 0.0, 0.0, 0.0, None);
/// assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12);
/// ```
pub struct HyperspatialEngine {
    pub(super) config: RwLock<ProjectionConfig>,
    pub(super) fields: FieldCache,
    pub(super) jitter: SharedJitter,
}

impl HyperspatialEngine {
    /// Create an engine with a validated configuration and a jitter source
    /// seeded from it.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `config` fails validation.
    pub fn new(config: ProjectionConfig) -> ProjectionResult<Self> {
        let source = SeededJitter::new(config.seed);
        Self::with_jitter_source(config, Box::new(source))
    }

    /// Create an engine that draws jitter from `source`.
    ///
    /// The source is reseeded on every `configure`.
    pub fn with_jitter_source(
        config: ProjectionConfig,
        source: Box<dyn JitterSource>,
    ) -> ProjectionResult<Self> {
        config.validate()?;
        debug!(mode = %config.mode, seed = config.seed, "Creating projection engine");
        Ok(Self {
            config: RwLock::new(config),
            fields: FieldCache::new(),
            jitter: Mutex::new(source),
        })
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> ProjectionConfig {
        self.config.read().clone()
    }

    /// Replace the core configuration fields from raw arguments.
    ///
    /// Fields not named here (`singularity_threshold`, `parallel_threshold`,
    /// `refine_closed_form`) keep their current values. On success the
    /// caches are cleared and the jitter source is reseeded.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` for an unknown mode code or a resolution that
    /// is not positive and finite. The engine is unchanged on error.
    pub fn configure(
        &self,
        mode: &str,
        quantum_correction: bool,
        tensor_resolution: f64,
        relativistic: bool,
        parallel: bool,
        seed: u64,
    ) -> ProjectionResult<()> {
        let parts = ProjectionConfig::from_parts(
            mode,
            quantum_correction,
            tensor_resolution,
            relativistic,
            parallel,
            seed,
        )?;
        let mut current = self.config.write();
        let next = ProjectionConfig {
            singularity_threshold: current.singularity_threshold,
            parallel_threshold: current.parallel_threshold,
            refine_closed_form: current.refine_closed_form,
            ..parts
        };
        self.install(&mut current, next);
        Ok(())
    }

    /// Replace the whole configuration.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `config` fails validation.
    pub fn apply_config(&self, config: ProjectionConfig) -> ProjectionResult<()> {
        config.validate()?;
        let mut current = self.config.write();
        self.install(&mut current, config);
        Ok(())
    }

    /// Swap in `next` while the write lock is held.
    fn install(&self, current: &mut ProjectionConfig, next: ProjectionConfig) {
        debug!(
            mode = %next.mode,
            quantum = next.quantum_correction,
            resolution = next.tensor_resolution,
            relativistic = next.relativistic,
            parallel = next.parallel,
            seed = next.seed,
            "Applying projection configuration"
        );
        *current = next;
        self.fields.clear();
        self.jitter.lock().reseed(current.seed);
    }

    /// Entry counts of the field and curvature caches.
    pub fn cache_stats(&self) -> CacheStats {
        self.fields.stats()
    }

    /// Context over a configuration snapshot.
    #[inline]
    pub(super) fn context<'a>(&'a self, config: &'a ProjectionConfig) -> ProjectionContext<'a> {
        ProjectionContext::new(config, &self.fields, &self.jitter)
    }
}

impl Default for HyperspatialEngine {
    fn default() -> Self {
        let config = ProjectionConfig::default();
        Self {
            jitter: Mutex::new(Box::new(SeededJitter::new(config.seed)) as Box<dyn JitterSource>),
            config: RwLock::new(config),
            fields: FieldCache::new(),
        }
    }
}

impl std::fmt::Debug for HyperspatialEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperspatialEngine")
            .field("config", &*self.config.read())
            .field("fields", &self.fields.stats())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(HyperspatialEngine: Send, Sync);
