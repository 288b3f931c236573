// File: crates/ascii-chart-core/src/axis.rs
// Summary: Axis model plus axis rules, value labels and time tick labels.

use tracing::trace;

use crate::grid::Grid;
use crate::scale::{TimeScale, ValueScale};
use crate::types::{glyph, Layout, TARGET_TICKS, TICK_LABEL_LEN};

/// Axis title as shown in the legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub label: String,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn default_x() -> Self {
        Self::new("Time")
    }

    pub fn default_y() -> Self {
        Self::new("Price")
    }
}

/// Vertical rule left of the plot, horizontal rule under it, `+` where they meet.
pub fn draw_axes(grid: &mut Grid, layout: &Layout) {
    let col = layout.axis_col();
    let row = layout.axis_row();
    for r in 0..row {
        grid.set(col, r, glyph::AXIS_V);
    }
    for c in layout.margin as i64..layout.width as i64 {
        grid.set(c, row, glyph::AXIS_H);
    }
    grid.set(col, row, glyph::CORNER);
}

/// Write the value each plot row stands for into the left margin.
pub fn draw_value_labels(grid: &mut Grid, layout: &Layout, scale: &ValueScale) {
    let end = layout.axis_col();
    for r in 0..layout.axis_row() {
        let text = format!("{:6.2}", scale.from_row(r));
        grid.put_str(0, r, &text, end);
    }
}

/// Sample indices that get a time label: every `max(1, n / 10)`-th, from 0.
pub fn tick_indices(n: usize) -> impl Iterator<Item = usize> {
    let step = (n / TARGET_TICKS).max(1);
    (0..n).step_by(step)
}

/// Display text for a tick: the time part of `date time` labels, cut to 5 chars.
pub fn tick_text(label: &str) -> &str {
    let time = if label.contains(' ') {
        label.split(' ').nth(1).unwrap_or_default()
    } else {
        label
    };
    match time.char_indices().nth(TICK_LABEL_LEN) {
        Some((cut, _)) => &time[..cut],
        None => time,
    }
}

/// Centre tick labels under their sample columns on the extra bottom row.
///
/// Only indices that have both a sample and a label are considered.
pub fn draw_time_labels(
    grid: &mut Grid,
    layout: &Layout,
    scale: &TimeScale,
    sample_count: usize,
    labels: &[String],
) {
    let width = layout.width as i64;
    let row = layout.label_row();
    let n = sample_count.min(labels.len());
    for i in tick_indices(sample_count).take_while(|&i| i < n) {
        let col = scale.to_col(i);
        if col >= width {
            continue;
        }
        let text = tick_text(&labels[i]);
        let half = (text.chars().count() / 2) as i64;
        let start = (col - half).max(layout.margin as i64);
        trace!(index = i, col, start, text, "time tick");
        grid.put_str(start, row, text, width);
    }
}
