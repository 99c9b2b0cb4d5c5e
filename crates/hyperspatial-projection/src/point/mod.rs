//! Hypervector point model.
//!
//! A [`GeoPoint`] embeds a geographic position into six components:
//!
//! | index | meaning |
//! |---|---|
//! | 0..3 | unit-sphere embedding (cosφ·cosλ, cosφ·sinλ, sinφ) |
//! | 3 | altitude / semi-major axis |
//! | 4 | 0.1·sin(2λ)·cosφ |
//! | 5 | 0.1·sin(3φ)·cosλ + 1e-9·t |
//!
//! Points are built fresh for every call and never mutated.
//!
//! # Module Structure
//!
//! - `types`: [`GeoPoint`] and the raw [`GeoCoordinate`] input
//! - `ops`: construction and the hyperspatial distance metric

mod ops;
mod types;


pub use self::types::{GeoCoordinate, GeoPoint};

pub(crate) use self::ops::{haversine_angle, wrap_longitude};
pub(crate) use self::types::canonical_bits;
