// File: crates/ascii-chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for cell math.

/// A grid cell address. Signed so that off-grid positions can be computed
/// and then dropped by the grid instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: i64,
    pub row: i64,
}

impl Cell {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

impl From<(i64, i64)> for Cell {
    fn from((col, row): (i64, i64)) -> Self {
        Self { col, row }
    }
}
