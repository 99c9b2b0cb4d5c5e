//! Distance, grid and warp commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hyperspatial_projection::{GeoCoordinate, GridBounds, HyperspatialEngine};
use serde::Serialize;

use super::{print_json, read_coordinates};

/// Arguments for `distance`.
#[derive(Args, Debug)]
pub struct DistanceArgs {
    #[arg(allow_negative_numbers = true)]
    pub lon1: f64,
    #[arg(allow_negative_numbers = true)]
    pub lat1: f64,
    #[arg(allow_negative_numbers = true)]
    pub lon2: f64,
    #[arg(allow_negative_numbers = true)]
    pub lat2: f64,
    /// Altitude of the first point, metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alt1: f64,
    /// Altitude of the second point, metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alt2: f64,
}

/// Arguments for `grid`.
#[derive(Args, Debug)]
pub struct GridArgs {
    #[arg(allow_negative_numbers = true)]
    pub min_lon: f64,
    #[arg(allow_negative_numbers = true)]
    pub max_lon: f64,
    #[arg(allow_negative_numbers = true)]
    pub min_lat: f64,
    #[arg(allow_negative_numbers = true)]
    pub max_lat: f64,
    /// Base resolution, degrees
    #[arg(long, default_value_t = 1.0)]
    pub resolution: f64,
    /// Disable curvature-adaptive spacing
    #[arg(long)]
    pub uniform: bool,
}

/// Arguments for `warp`.
#[derive(Args, Debug)]
pub struct WarpArgs {
    /// JSON file holding an array of {lon, lat, alt}
    pub file: PathBuf,
    #[arg(allow_negative_numbers = true)]
    pub centre_lon: f64,
    #[arg(allow_negative_numbers = true)]
    pub centre_lat: f64,
    /// Warp strength; negative pushes away
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub intensity: f64,
    /// Gaussian falloff radius, degrees
    #[arg(long, default_value_t = 10.0)]
    pub falloff: f64,
}

#[derive(Serialize)]
struct DistanceOutput {
    metres: f64,
}

pub fn handle_distance(engine: &HyperspatialEngine, args: DistanceArgs) -> Result<()> {
    let a = GeoCoordinate::new(args.lon1, args.lat1).with_altitude(args.alt1);
    let b = GeoCoordinate::new(args.lon2, args.lat2).with_altitude(args.alt2);
    print_json(&DistanceOutput {
        metres: engine.hyperspatial_distance(&a, &b),
    })
}

pub fn handle_grid(engine: &HyperspatialEngine, args: GridArgs) -> Result<()> {
    let bounds = GridBounds::new(args.min_lon, args.max_lon, args.min_lat, args.max_lat)?;
    let grid = engine.generate_hypergrid(&bounds, args.resolution, !args.uniform)?;
    print_json(&grid)
}

pub fn handle_warp(engine: &HyperspatialEngine, args: WarpArgs) -> Result<()> {
    let points = read_coordinates(&args.file)?;
    let warped = engine.warp_point_field(
        &points,
        args.centre_lon,
        args.centre_lat,
        args.intensity,
        args.falloff,
    )?;
    print_json(&warped)
}
