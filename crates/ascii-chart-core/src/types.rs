// File: crates/ascii-chart-core/src/types.rs
// Summary: Shared types and constants (grid sizes, axis margin, glyphs).

/// Default grid width in characters.
pub const WIDTH: usize = 80;
/// Default plot height in rows (the time-label row comes on top of this).
pub const HEIGHT: usize = 20;
/// Columns reserved on the left for value-axis labels; the axis rule sits in the last one.
pub const AXIS_MARGIN: usize = 6;
/// Smallest plot height that keeps vertical scaling non-degenerate.
pub const MIN_HEIGHT: usize = 3;
/// Returned verbatim when there is nothing to plot.
pub const NO_DATA: &str = "No data to plot";
/// Time-axis tick labels are cut to this many characters (`HH:MM`).
pub const TICK_LABEL_LEN: usize = 5;
/// Roughly how many time ticks to spread across the axis.
pub const TARGET_TICKS: usize = 10;

/// Characters used to paint the chart.
pub mod glyph {
    pub const BLANK: char = ' ';
    pub const AXIS_V: char = '|';
    pub const AXIS_H: char = '-';
    pub const CORNER: char = '+';
    pub const POINT: char = '*';
    pub const VERTICAL: char = '|';
    pub const FLAT: char = '_';
    pub const RISE: char = '/';
    pub const FALL: char = '\\';
}

/// Grid geometry derived from the requested width/height.
/// Contract: `height` counts plot rows only; the grid has `height + 1` rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub margin: usize,
}

impl Layout {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height, margin: AXIS_MARGIN }
    }
    /// Columns available to the plot, right of the margin.
    pub const fn usable_width(&self) -> usize { self.width.saturating_sub(self.margin) }
    /// Column holding the vertical value axis.
    pub const fn axis_col(&self) -> i64 { self.margin as i64 - 1 }
    /// Row holding the horizontal time axis.
    pub const fn axis_row(&self) -> i64 { self.height as i64 - 1 }
    /// Lowest row a sample can land on.
    pub const fn bottom_row(&self) -> i64 { self.height as i64 - 2 }
    /// Extra row below the axis for time labels.
    pub const fn label_row(&self) -> i64 { self.height as i64 }
    /// Number of row steps between the lowest and highest sample.
    pub const fn plot_span(&self) -> usize { self.height.saturating_sub(MIN_HEIGHT) }
    /// Total rows in the grid buffer.
    pub const fn grid_rows(&self) -> usize { self.height + 1 }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}
