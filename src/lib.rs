mod app;
pub mod animation;
pub mod camera;
pub mod cohort;
pub mod datasets;
pub mod error;
pub mod growth;
pub mod lin_reg;
pub mod log;
pub mod nearest;
pub mod plane_fit;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod table;
pub use app::PlaqueApp;

/// Output of the half-life table export.
pub const HALF_LIFE_FILE: &str = "half_life_doubling_times.csv";
