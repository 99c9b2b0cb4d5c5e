//! Physical and numerical constants shared by every projection mode.

/// Number of components in a hypervector point.
pub const TENSOR_DIM: usize = 6;

/// WGS-84 semi-major axis (metres).
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// WGS-84 flattening.
pub const FLATTENING: f64 = 1.0 / 298.257_223_563;

/// First eccentricity squared, e^2 = f(2 - f).
pub const ECCENTRICITY_SQ: f64 = FLATTENING * (2.0 - FLATTENING);

/// Speed of light in vacuum (m/s).
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Denominator of the Lorentz-style velocity ratio, beta = t / 3e8.
pub const LORENTZ_DENOMINATOR: f64 = 3.0e8;

/// Upper bound on beta.
pub const MAX_BETA: f64 = 0.99;

/// Schwarzschild radius of the Earth (metres).
pub const SCHWARZSCHILD_RADIUS: f64 = 8.87e-3;

/// Standard gravitational parameter of the Earth (m^3/s^2).
pub const EARTH_GM: f64 = 3.986_004_418e14;

/// Golden ratio.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Degeneracy tolerance for gnomonic and Lambert geometry.
pub const GEOMETRY_EPS: f64 = 1e-12;

/// Scale of the quantum-correction jitter added to point components.
pub const JITTER_SCALE: f64 = 1e-9;

/// Baseline uncertainty radius at sea level (metres).
pub const BASE_UNCERTAINTY: f64 = 1.0;

/// Uncertainty growth per metre of altitude.
pub const UNCERTAINTY_PER_METRE: f64 = 1e-3;

/// Default threshold on |pseudo-determinant| below which inversion fails.
pub const DEFAULT_SINGULARITY_THRESHOLD: f64 = 1e-10;

/// Default iteration budget for iterative inversion.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Planar error at which iterative inversion stops.
pub const CONVERGENCE_TOLERANCE: f64 = 1e-12;

/// Batches strictly larger than this fan out to the worker pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Rescale applied by the closed-form Mercator inverse (1 / 0.5).
pub const MERCATOR_INVERSE_RESCALE: f64 = 2.0;

/// Approximate relativistic rescale applied by the Lambert inverse.
pub const LAMBERT_RELATIVISTIC_RESCALE: f64 = 1.01;
