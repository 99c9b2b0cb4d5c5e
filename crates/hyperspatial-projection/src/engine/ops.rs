//! Engine operations.

use rayon::prelude::*;
use tracing::{debug, instrument};

use super::types::HyperspatialEngine;
use crate::error::ProjectionResult;
use crate::forward::{extract_planar, project_point, PlanarPoint};
use crate::grid::{self, GridBounds};
use crate::inverse::{self, Unprojected};
use crate::matrix::build_projection_matrix;
use crate::point::{GeoCoordinate, GeoPoint};

impl HyperspatialEngine {
    /// Project one point through the active mode's full forward strategy.
    ///
    /// `reference` centres modes B and F and warps the mode matrix of A;
    /// it is never jittered.
    pub fn project_to_screen(
        &self,
        lon: f64,
        lat: f64,
        alt: f64,
        t_offset: f64,
        reference: Option<GeoCoordinate>,
    ) -> PlanarPoint {
        let config = self.config.read();
        let ctx = self.context(&config);
        let point = GeoPoint::new(lon, lat, alt, t_offset, &ctx);
        let reference = reference.map(|r| GeoPoint::reference(&r, &ctx));
        project_point(config.mode, &point, reference.as_ref(), &ctx)
    }

    /// Project many points with the mode matrix alone.
    ///
    /// The matrix is built once, warped by `reference` when given, and
    /// applied as `v = M·c` to each point's components before planar
    /// extraction, without the per-mode strategy steps of
    /// [`project_to_screen`](Self::project_to_screen). Results for modes
    /// other than A therefore differ from single-point projection.
    /// `t_offset` is added to every coordinate's own temporal offset.
    /// Output order matches input order. Runs on the rayon pool when
    /// parallelism is enabled and the batch exceeds `parallel_threshold`.
    #[instrument(skip(self, coords), fields(n = coords.len()))]
    pub fn batch_project(
        &self,
        coords: &[GeoCoordinate],
        t_offset: f64,
        reference: Option<GeoCoordinate>,
    ) -> Vec<PlanarPoint> {
        let config = self.config.read();
        let ctx = self.context(&config);
        let mode = config.mode;
        let reference = reference.map(|r| GeoPoint::reference(&r, &ctx));
        let matrix = build_projection_matrix(mode, reference.as_ref(), &ctx);

        let project = |coord: &GeoCoordinate| {
            let point = GeoPoint::new(coord.lon, coord.lat, coord.alt, coord.t_offset + t_offset, &ctx);
            extract_planar(&matrix.multiply(point.components()), mode)
        };

        let parallel = config.parallel && coords.len() > config.parallel_threshold;
        debug!(%mode, parallel, threshold = config.parallel_threshold, "Batch projection");
        if parallel {
            coords.par_iter().map(project).collect()
        } else {
            coords.iter().map(project).collect()
        }
    }

    /// Invert planar (x, y) under the active mode.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a zero iteration budget or non-finite input.
    #[instrument(skip(self))]
    pub fn unproject_from_screen(
        &self,
        x: f64,
        y: f64,
        reference: Option<GeoCoordinate>,
        iterations: usize,
    ) -> ProjectionResult<Unprojected> {
        let config = self.config.read();
        let ctx = self.context(&config);
        let reference = reference.map(|r| GeoPoint::reference(&r, &ctx));
        inverse::unproject(config.mode, x, y, reference.as_ref(), iterations, &ctx)
    }

    /// Hyperspatial distance between two coordinates.
    ///
    /// Both points are built without jitter, so the metric stays zero on
    /// identical input and symmetric whatever the configuration.
    pub fn hyperspatial_distance(&self, a: &GeoCoordinate, b: &GeoCoordinate) -> f64 {
        let relativistic = self.config.read().relativistic;
        let p1 = GeoPoint::deterministic(a.lon, a.lat, a.alt, a.t_offset, relativistic);
        let p2 = GeoPoint::deterministic(b.lon, b.lat, b.alt, b.t_offset, relativistic);
        p1.hyperspatial_distance(&p2, relativistic)
    }

    /// Pull `points` towards (centre_lon, centre_lat); see
    /// [`grid::warp_point_field`].
    pub fn warp_point_field(
        &self,
        points: &[GeoCoordinate],
        centre_lon: f64,
        centre_lat: f64,
        intensity: f64,
        falloff_deg: f64,
    ) -> ProjectionResult<Vec<GeoCoordinate>> {
        grid::warp_point_field(points, (centre_lon, centre_lat), intensity, falloff_deg)
    }

    /// Lattice over `bounds`; see [`grid::generate_hypergrid`].
    pub fn generate_hypergrid(
        &self,
        bounds: &GridBounds,
        base_resolution: f64,
        adaptive: bool,
    ) -> ProjectionResult<Vec<(f64, f64)>> {
        let config = self.config.read();
        let ctx = self.context(&config);
        grid::generate_hypergrid(bounds, base_resolution, adaptive, &ctx)
    }

    /// Cached curvature at (lon, lat) under the current resolution.
    pub fn curvature_at(&self, lon: f64, lat: f64) -> f64 {
        let config = self.config.read();
        self.context(&config).curvature(lon, lat)
    }
}
