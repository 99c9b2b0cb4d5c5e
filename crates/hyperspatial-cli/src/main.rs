//! Hyperspatial CLI
//!
//! Command-line front end over the projection engine. Every command prints
//! JSON to stdout; logs go to stderr.
//!
//! # Commands
//!
//! - `project`: project one point to planar coordinates
//! - `batch`: project a JSON array of coordinates with the mode matrix
//! - `unproject`: invert planar coordinates
//! - `distance`: hyperspatial distance between two points
//! - `grid`: generate a (possibly adaptive) lattice
//! - `warp`: pull a JSON array of coordinates towards a centre
//!
//! Exit code 1 on any error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hyperspatial_projection::{HyperspatialEngine, ProjectionConfig, ProjectionMode};
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Hyperspatial projection engine CLI
#[derive(Parser)]
#[command(name = "hyperspatial-cli")]
#[command(version)]
#[command(about = "Project, unproject and sample geographic coordinates")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file; missing fields take defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Projection mode code, overriding the configuration file
    #[arg(long, global = true)]
    mode: Option<ProjectionMode>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project one point to planar coordinates
    Project(commands::projection::ProjectArgs),
    /// Project a JSON array of {lon, lat, alt} with the mode matrix
    Batch(commands::projection::BatchArgs),
    /// Invert planar coordinates back to (lon, lat)
    Unproject(commands::projection::UnprojectArgs),
    /// Hyperspatial distance between two points, metres
    Distance(commands::geometry::DistanceArgs),
    /// Generate a longitude-major lattice
    Grid(commands::geometry::GridArgs),
    /// Pull a JSON array of coordinates towards a centre
    Warp(commands::geometry::WarpArgs),
}

/// Build the engine from `--config` and `--mode`.
fn build_engine(config_path: Option<&PathBuf>, mode: Option<ProjectionMode>) -> Result<HyperspatialEngine> {
    let mut config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading configuration {}", path.display()))?;
            ProjectionConfig::from_json(&text)
                .with_context(|| format!("parsing configuration {}", path.display()))?
        }
        None => ProjectionConfig::default(),
    };
    if let Some(mode) = mode {
        config.mode = mode;
    }
    debug!(?config, "Building engine");
    Ok(HyperspatialEngine::new(config)?)
}

fn run(cli: Cli) -> Result<()> {
    let engine = build_engine(cli.config.as_ref(), cli.mode)?;
    match cli.command {
        Commands::Project(args) => commands::projection::handle_project(&engine, args),
        Commands::Batch(args) => commands::projection::handle_batch(&engine, args),
        Commands::Unproject(args) => commands::projection::handle_unproject(&engine, args),
        Commands::Distance(args) => commands::geometry::handle_distance(&engine, args),
        Commands::Grid(args) => commands::geometry::handle_grid(&engine, args),
        Commands::Warp(args) => commands::geometry::handle_warp(&engine, args),
    }
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
