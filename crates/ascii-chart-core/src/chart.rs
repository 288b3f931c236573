// File: crates/ascii-chart-core/src/chart.rs
// Summary: Chart struct and the text rendering pipeline onto a character grid.

use tracing::debug;

use crate::axis::{draw_axes, draw_time_labels, draw_value_labels};
use crate::error::ChartError;
use crate::grid::Grid;
use crate::raster::draw_polyline;
use crate::scale::{plot_positions, TimeScale, ValueScale};
use crate::series::Series;
use crate::types::{Layout, AXIS_MARGIN, HEIGHT, MIN_HEIGHT, NO_DATA, WIDTH};
use crate::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: usize,
    /// Plot rows including the axis row; one more row is added for time labels.
    pub height: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

impl RenderOptions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Reject sizes that leave no plot column or flatten the value scale.
    /// Rendering accepts them anyway and clips.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.width < AXIS_MARGIN + 1 {
            return Err(ChartError::WidthTooSmall { width: self.width, min: AXIS_MARGIN + 1 });
        }
        if self.height < MIN_HEIGHT {
            return Err(ChartError::HeightTooSmall { height: self.height, min: MIN_HEIGHT });
        }
        Ok(())
    }

    pub fn layout(&self) -> Layout {
        Layout::new(self.width, self.height)
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Series,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(series: Series) -> Self {
        Self {
            series,
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Render the chart, legend and (when labelled) the full timestamp list.
    pub fn render_to_string(&self, opts: &RenderOptions) -> String {
        let Some((min_v, max_v)) = self.series.range() else {
            return NO_DATA.to_string();
        };
        let samples = &self.series.samples;
        let labels = self.series.labels();
        let layout = opts.layout();

        debug!(
            samples = samples.len(),
            labels = labels.map_or(0, <[String]>::len),
            min = min_v,
            max = max_v,
            width = layout.width,
            height = layout.height,
            "rendering chart"
        );

        let grid = self.render_grid(&layout, min_v, max_v);

        let mut out = String::new();
        grid.write_into(&mut out);
        out.push_str(&format!(
            "\nMin: {:.2} | Max: {:.2} | Y-axis: {} | X-axis: {}\n",
            min_v, max_v, self.y_axis.label, self.x_axis.label
        ));
        if let Some(labels) = labels {
            out.push_str("\nAll Time Stamps:\n");
            for l in labels {
                out.push_str(l);
                out.push_str("\n\n");
            }
        }
        out
    }

    /// Paint axes, value labels, the line and time ticks onto a fresh grid.
    pub fn render_grid(&self, layout: &Layout, min_v: f64, max_v: f64) -> Grid {
        let samples = &self.series.samples;
        let xs = TimeScale::for_layout(layout, samples.len());
        let ys = ValueScale::for_layout(layout, min_v, max_v);
        let positions = plot_positions(samples, &xs, &ys);

        let mut grid = Grid::new(layout.width, layout.grid_rows());
        draw_axes(&mut grid, layout);
        draw_value_labels(&mut grid, layout, &ys);
        draw_polyline(&mut grid, &positions);

        if let Some(labels) = self.series.labels() {
            if samples.len() > 1 {
                draw_time_labels(&mut grid, layout, &xs, samples.len(), labels);
            }
        }
        grid
    }
}

/// Render `samples` (and optional per-sample `labels`) into a `width` x `height`
/// character chart. Returns `"No data to plot"` for an empty input.
pub fn render(samples: &[f64], labels: Option<&[String]>, width: usize, height: usize) -> String {
    let mut series = Series::new(samples.to_vec());
    if let Some(labels) = labels {
        series = series.with_labels(labels.iter().cloned());
    }
    Chart::new(series).render_to_string(&RenderOptions::new(width, height))
}
