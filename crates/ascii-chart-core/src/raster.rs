// File: crates/ascii-chart-core/src/raster.rs
// Summary: Segment rasterization onto the character grid (straight rules + Bresenham).

use crate::geometry::Cell;
use crate::grid::Grid;
use crate::types::glyph;

/// Integer Bresenham walk from `from` towards `to`.
///
/// Yields every visited cell except the terminal one, which callers mark
/// separately. Yields nothing when `from == to`.
#[derive(Clone, Debug)]
pub struct Bresenham {
    cur: Cell,
    end: Cell,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
}

impl Bresenham {
    pub fn new(from: Cell, to: Cell) -> Self {
        let dx = (to.col - from.col).abs();
        let dy = (to.row - from.row).abs();
        Self {
            cur: from,
            end: to,
            dx,
            dy,
            sx: if from.col < to.col { 1 } else { -1 },
            sy: if from.row < to.row { 1 } else { -1 },
            err: dx - dy,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.cur == self.end {
            return None;
        }
        let out = self.cur;
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.cur.col += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.cur.row += self.sy;
        }
        Some(out)
    }
}

/// Draw the segment between two consecutive plot positions.
pub fn draw_segment(grid: &mut Grid, from: Cell, to: Cell) {
    if from.col == to.col {
        let (lo, hi) = (from.row.min(to.row), from.row.max(to.row));
        for row in lo..=hi {
            grid.set(from.col, row, glyph::VERTICAL);
        }
    } else if from.row == to.row {
        let (lo, hi) = (from.col.min(to.col), from.col.max(to.col));
        for col in lo..=hi {
            grid.set(col, from.row, glyph::FLAT);
        }
    } else {
        // Screen rows grow downwards, so a smaller row means the line rises.
        let slope = if to.row < from.row { glyph::RISE } else { glyph::FALL };
        for cell in Bresenham::new(from, to) {
            grid.set_cell(cell, slope);
        }
        grid.set_cell(to, glyph::POINT);
    }
}

/// Connect consecutive positions, then stamp the first one as a point.
pub fn draw_polyline(grid: &mut Grid, positions: &[Cell]) {
    for pair in positions.windows(2) {
        draw_segment(grid, pair[0], pair[1]);
    }
    if let Some(&first) = positions.first() {
        grid.set_cell(first, glyph::POINT);
    }
}
