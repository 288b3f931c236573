// File: crates/ascii-chart-core/src/error.rs
// Summary: Configuration errors. Rendering itself never fails.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("width {width} is too small; need at least {min} columns")]
    WidthTooSmall { width: usize, min: usize },
    #[error("height {height} is too small; need at least {min} rows")]
    HeightTooSmall { height: usize, min: usize },
}
