// File: crates/ascii-chart-core/src/scale.rs
// Summary: Time (X) and value (Y) transforms between data space and grid cells.

use crate::geometry::Cell;
use crate::types::Layout;

/// Sample index on the time axis.
pub type Logical = usize;
/// Sample value (e.g., price).
pub type Value = f64;

/// Horizontal scale: evenly spaced sample indices starting at the plot's left edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub left_col: i64,
    pub step: f64,
}

impl TimeScale {
    /// Spread `count` samples over `usable_width` columns starting at `left_col`.
    /// The first sample sits on `left_col`, the last on `left_col + usable_width - 1`.
    pub fn new(left_col: i64, usable_width: usize, count: usize) -> Self {
        let step = if count > 1 {
            usable_width.saturating_sub(1) as f64 / (count - 1) as f64
        } else {
            0.0
        };
        Self { left_col, step }
    }

    pub fn for_layout(layout: &Layout, count: usize) -> Self {
        Self::new(layout.margin as i64, layout.usable_width(), count)
    }

    #[inline]
    pub fn to_col(&self, i: Logical) -> i64 {
        self.left_col + (i as f64 * self.step).floor() as i64
    }
}

/// Vertical scale mapping `[vmin, vmin + span]` onto rows `bottom_row ..= bottom_row - rows`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub vmin: Value,
    pub vmax: Value,
    /// `vmax - vmin`, or 1 when every sample is equal.
    pub span: Value,
    pub bottom_row: i64,
    pub rows: usize,
}

impl ValueScale {
    pub fn new(vmin: Value, vmax: Value, bottom_row: i64, rows: usize) -> Self {
        let mut span = vmax - vmin;
        if span == 0.0 {
            span = 1.0;
        }
        Self { vmin, vmax, span, bottom_row, rows }
    }

    pub fn for_layout(layout: &Layout, vmin: Value, vmax: Value) -> Self {
        Self::new(vmin, vmax, layout.bottom_row(), layout.plot_span())
    }

    /// Row for a value; the maximum lands `rows` above the bottom.
    #[inline]
    pub fn to_row(&self, v: Value) -> i64 {
        self.bottom_row - ((v - self.vmin) / self.span * self.rows as f64).floor() as i64
    }

    /// Value a row stands for, by running `to_row` backwards.
    #[inline]
    pub fn from_row(&self, row: i64) -> Value {
        let denom = self.rows.max(1) as f64;
        self.vmin + (self.bottom_row - row) as f64 / denom * self.span
    }
}

/// Map every sample to its cell.
pub fn plot_positions(samples: &[Value], xs: &TimeScale, ys: &ValueScale) -> Vec<Cell> {
    samples
        .iter()
        .enumerate()
        .map(|(i, &v)| Cell::new(xs.to_col(i), ys.to_row(v)))
        .collect()
}
