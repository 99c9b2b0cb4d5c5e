//! CLI command handlers
//!
//! # Modules
//!
//! - `projection`: `project`, `batch` and `unproject`
//! - `geometry`: `distance`, `grid` and `warp`

pub mod geometry;
pub mod projection;

use std::path::Path;

use anyhow::{Context, Result};
use hyperspatial_projection::GeoCoordinate;
use serde::Serialize;

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialising output")?;
    println!("{}", text);
    Ok(())
}

/// Read a JSON array of coordinates.
pub fn read_coordinates(path: &Path) -> Result<Vec<GeoCoordinate>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading coordinates {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing coordinates {}", path.display()))
}

/// Reference coordinate from an optional `--ref-lon`/`--ref-lat` pair.
pub fn reference(lon: Option<f64>, lat: Option<f64>) -> Option<GeoCoordinate> {
    match (lon, lat) {
        (Some(lon), Some(lat)) => Some(GeoCoordinate::new(lon, lat)),
        _ => None,
    }
}
