//! Thread-safe memoisation of field and curvature lookups.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use super::{compute_curvature, compute_field};
use crate::constants::TENSOR_DIM;
use crate::point::canonical_bits;

type CellKey = (u64, u64);

#[inline]
fn cell_key(lon: f64, lat: f64) -> CellKey {
    (canonical_bits(lon), canonical_bits(lat))
}

/// Entry counts of both caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub field_entries: usize,
    pub curvature_entries: usize,
}

/// Field-vector and curvature caches.
///
/// Entries are insert-if-absent and never expire; [`FieldCache::clear`]
/// is the only way to drop them.
#[derive(Debug, Default)]
pub struct FieldCache {
    field: RwLock<HashMap<CellKey, [f64; TENSOR_DIM]>>,
    curvature: RwLock<HashMap<CellKey, f64>>,
}

impl FieldCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Curvature at (lon, lat), computed on first use.
    pub fn curvature(&self, lon: f64, lat: f64, resolution: f64) -> f64 {
        let key = cell_key(lon, lat);
        if let Some(&value) = self.curvature.read().get(&key) {
            return value;
        }
        let value = compute_curvature(lon, lat, resolution);
        *self.curvature.write().entry(key).or_insert(value)
    }

    /// Field vector at (lon, lat), computed on first use.
    pub fn field_vector(&self, lon: f64, lat: f64, resolution: f64) -> [f64; TENSOR_DIM] {
        let key = cell_key(lon, lat);
        if let Some(&value) = self.field.read().get(&key) {
            return value;
        }
        let curvature = self.curvature(lon, lat, resolution);
        let value = compute_field(lon, lat, resolution, curvature);
        *self.field.write().entry(key).or_insert(value)
    }

    /// Drop every entry from both caches.
    pub fn clear(&self) {
        let mut field = self.field.write();
        let mut curvature = self.curvature.write();
        debug!(
            field_entries = field.len(),
            curvature_entries = curvature.len(),
            "Clearing field/curvature caches"
        );
        field.clear();
        curvature.clear();
    }

    pub fn field_len(&self) -> usize {
        self.field.read().len()
    }

    pub fn curvature_len(&self) -> usize {
        self.curvature.read().len()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            field_entries: self.field_len(),
            curvature_entries: self.curvature_len(),
        }
    }
}
