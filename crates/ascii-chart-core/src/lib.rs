// File: crates/ascii-chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart construction and text rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod raster;
pub mod error;

pub use chart::{render, Chart, RenderOptions};
pub use series::Series;
pub use axis::{tick_indices, tick_text, Axis};
pub use grid::Grid;
pub use geometry::Cell;
pub use scale::{TimeScale, ValueScale};
pub use raster::Bresenham;
pub use error::ChartError;
pub use types::{Layout, NO_DATA};
