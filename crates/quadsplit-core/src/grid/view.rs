//! GridView - Borrowed rectangular window into a Grid

use super::{Grid, GridSource, check_window};
use crate::error::{Error, Result};
use std::ops::Range;

/// A window of a [`Grid`] that shares the grid's storage.
///
/// Slicing a view produces a narrower view of the same grid, so a region
/// tree built over views never copies samples.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
}

impl<'a> GridView<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            row_offset: 0,
            col_offset: 0,
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    /// Position of this window's top-left sample in the underlying grid
    pub fn offset(&self) -> (usize, usize) {
        (self.row_offset, self.col_offset)
    }

    /// Get the sample at `(row, col)`, relative to the window
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside the window.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.row(row)[col])
    }

    /// Get a row of the window
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    pub fn row(&self, row: usize) -> &'a [f64] {
        let full = self.grid.row(self.row_offset + row);
        &full[self.col_offset..self.col_offset + self.cols]
    }

    /// Iterate samples in row-major order
    pub fn iter(&self) -> impl Iterator<Item = f64> + 'a {
        let view = *self;
        (0..view.rows).flat_map(move |r| view.row(r).iter().copied())
    }

    /// Copy the window into an owned grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the window is empty.
    pub fn to_grid(&self) -> Result<Grid> {
        Grid::from_data(self.rows, self.cols, self.values())
    }
}

impl GridSource for GridView<'_> {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        check_window(&rows, &cols, self.shape())?;
        Ok(Self {
            grid: self.grid,
            row_offset: self.row_offset + rows.start,
            col_offset: self.col_offset + cols.start,
            rows: rows.len(),
            cols: cols.len(),
        })
    }

    fn values(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
