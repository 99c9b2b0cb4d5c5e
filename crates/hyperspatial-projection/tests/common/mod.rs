//! Shared fixtures and helpers for integration tests.
//!
//! - `fixtures`: deterministic coordinates and per-mode sample points
//! - `helpers`: engine construction and tolerance assertions

pub mod fixtures;
