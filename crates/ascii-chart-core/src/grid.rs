// File: crates/ascii-chart-core/src/grid.rs
// Summary: Fixed-size character buffer with clipped writes.

use std::fmt;

use crate::geometry::Cell;
use crate::types::glyph;

/// Row-major character grid. Never resized after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    rows: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Allocate `rows` x `width` blank cells.
    pub fn new(width: usize, rows: usize) -> Self {
        Self { width, rows, cells: vec![glyph::BLANK; width * rows] }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn rows(&self) -> usize { self.rows }

    #[inline]
    fn index(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.rows {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Write one cell. Off-grid writes are dropped; returns whether it landed.
    pub fn set(&mut self, col: i64, row: i64, ch: char) -> bool {
        match self.index(col, row) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn set_cell(&mut self, cell: Cell, ch: char) -> bool {
        self.set(cell.col, cell.row, ch)
    }

    pub fn get(&self, col: i64, row: i64) -> Option<char> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// Write `text` left to right from `col`, stopping before column `end`
    /// (and always at the grid edge).
    pub fn put_str(&mut self, col: i64, row: i64, text: &str, end: i64) {
        for (x, ch) in (col..).zip(text.chars()) {
            if x >= end {
                break;
            }
            self.set(x, row, ch);
        }
    }

    /// One row as a string; `None` past the last row.
    pub fn row_string(&self, row: usize) -> Option<String> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.width;
        Some(self.cells[start..start + self.width].iter().collect())
    }

    /// Append every row, newline-terminated, top to bottom.
    pub fn write_into(&self, out: &mut String) {
        out.reserve(self.rows * (self.width + 1));
        if self.width == 0 {
            for _ in 0..self.rows {
                out.push('\n');
            }
            return;
        }
        for line in self.cells.chunks(self.width) {
            out.extend(line.iter());
            out.push('\n');
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        self.write_into(&mut s);
        f.write_str(&s)
    }
}
