//! The projection engine: the single entry point for callers.
//!
//! [`HyperspatialEngine`] owns the mutable configuration, the field caches
//! and the jitter source. Every operation takes a read snapshot of the
//! configuration and holds it for the whole call, so a concurrent
//! `configure` can never be observed half-applied. Reconfiguring clears
//! the caches and reseeds the jitter source under the write lock.
//!
//! # Concurrency
//!
//! The engine is `Send + Sync` and meant to be shared behind an `Arc`.
//! Jitter draws are serialised by a mutex; when a parallel batch runs with
//! quantum correction enabled, the order in which workers take draws is
//! unspecified and the output is not reproducible across runs. Sequential
//! calls with the same seed reproduce exactly.
//!
//! # Module Structure
//!
//! - `types`: the engine struct, construction and configuration
//! - `ops`: projection, inversion, distance and grid operations

mod ops;
mod types;


pub use self::types::HyperspatialEngine;
