//! Forward, batch and inverse projection commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use hyperspatial_projection::{HyperspatialEngine, DEFAULT_ITERATIONS};
use serde::Serialize;
use tracing::info;

use super::{print_json, read_coordinates, reference};

/// Arguments for `project`.
#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Longitude, degrees
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,
    /// Latitude, degrees
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,
    /// Altitude, metres
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub alt: f64,
    /// Temporal offset
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,
    /// Reference longitude, degrees
    #[arg(long, requires = "ref_lat", allow_negative_numbers = true)]
    pub ref_lon: Option<f64>,
    /// Reference latitude, degrees
    #[arg(long, requires = "ref_lon", allow_negative_numbers = true)]
    pub ref_lat: Option<f64>,
}

/// Arguments for `batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of {lon, lat, alt}
    pub file: PathBuf,
    /// Temporal offset added to every point
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub time: f64,
    /// Reference longitude, degrees
    #[arg(long, requires = "ref_lat", allow_negative_numbers = true)]
    pub ref_lon: Option<f64>,
    /// Reference latitude, degrees
    #[arg(long, requires = "ref_lon", allow_negative_numbers = true)]
    pub ref_lat: Option<f64>,
}

/// Arguments for `unproject`.
#[derive(Args, Debug)]
pub struct UnprojectArgs {
    /// Planar x
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    /// Planar y
    #[arg(allow_negative_numbers = true)]
    pub y: f64,
    /// Refinement iteration budget
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,
    /// Reference longitude, degrees
    #[arg(long, requires = "ref_lat", allow_negative_numbers = true)]
    pub ref_lon: Option<f64>,
    /// Reference latitude, degrees
    #[arg(long, requires = "ref_lon", allow_negative_numbers = true)]
    pub ref_lat: Option<f64>,
}

#[derive(Serialize)]
struct BatchOutput<T: Serialize> {
    mode: String,
    count: usize,
    points: T,
}

pub fn handle_project(engine: &HyperspatialEngine, args: ProjectArgs) -> Result<()> {
    let planar = engine.project_to_screen(
        args.lon,
        args.lat,
        args.alt,
        args.time,
        reference(args.ref_lon, args.ref_lat),
    );
    print_json(&planar)
}

pub fn handle_batch(engine: &HyperspatialEngine, args: BatchArgs) -> Result<()> {
    let coords = read_coordinates(&args.file)?;
    info!(count = coords.len(), file = %args.file.display(), "Projecting batch");
    let points = engine.batch_project(&coords, args.time, reference(args.ref_lon, args.ref_lat));
    print_json(&BatchOutput {
        mode: engine.config().mode.code().to_string(),
        count: points.len(),
        points,
    })
}

pub fn handle_unproject(engine: &HyperspatialEngine, args: UnprojectArgs) -> Result<()> {
    let result = engine.unproject_from_screen(
        args.x,
        args.y,
        reference(args.ref_lon, args.ref_lat),
        args.iterations,
    )?;
    print_json(&result)
}
