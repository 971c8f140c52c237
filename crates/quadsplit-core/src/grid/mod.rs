//! Grid - Dense 2-D array of samples
//!
//! `Grid` is a rectangular, row-major array of `f64` samples, the input to
//! a region quadtree. Region trees never write to their grid; they only
//! ask for its extent and for rectangular sub-regions of it, which is
//! what the [`GridSource`] trait captures.
//!
//! Two implementations are provided:
//!
//! - [`Grid`] owns its data; slicing copies the window into a new `Grid`.
//! - [`GridView`] borrows a window of a `Grid`; slicing narrows the window
//!   without copying.
//!
//! # Examples
//!
//! ```
//! use quadsplit_core::{Grid, GridSource};
//!
//! let grid = Grid::from_data(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
//! let view = grid.view();
//! let right = view.slice(0..2, 1..3).unwrap();
//! assert_eq!(right.shape(), (2, 2));
//! assert_eq!(right.values(), vec![2.0, 3.0, 5.0, 6.0]);
//! ```

mod view;

pub use view::GridView;

use crate::error::{Error, Result};
use std::ops::Range;

/// Read-only access to a rectangular grid of samples.
///
/// Rows are indexed from the top. Slices may be empty (zero rows or
/// columns), which happens when odd extents are halved and truncated.
pub trait GridSource: Sized {
    /// Extent as `(rows, cols)`
    fn shape(&self) -> (usize, usize);

    /// Rectangular sub-region `rows` x `cols`, relative to this grid
    ///
    /// # Errors
    ///
    /// Returns [`Error::SliceOutOfBounds`] if a range is reversed or
    /// reaches past the extent.
    fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self>;

    /// All samples in row-major order
    fn values(&self) -> Vec<f64>;

    /// Check if the grid has no samples
    fn is_empty(&self) -> bool {
        let (rows, cols) = self.shape();
        rows == 0 || cols == 0
    }
}

pub(crate) fn check_window(
    rows: &Range<usize>,
    cols: &Range<usize>,
    shape: (usize, usize),
) -> Result<()> {
    if rows.start > rows.end || cols.start > cols.end || rows.end > shape.0 || cols.end > shape.1
    {
        return Err(Error::SliceOutOfBounds {
            row_start: rows.start,
            row_end: rows.end,
            col_start: cols.start,
            col_end: cols.end,
            rows: shape.0,
            cols: shape.1,
        });
    }
    Ok(())
}

/// Owned grid of samples
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The sample at
/// `(row, col)` is at index `row * cols + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Create a grid with all samples set to zero
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` or `cols` is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        Self::new_with_value(rows, cols, 0.0)
    }

    /// Create a grid with all samples set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `rows` or `cols` is 0.
    pub fn new_with_value(rows: usize, cols: usize, value: f64) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Create a grid from row-major data
    ///
    /// # Errors
    ///
    /// Returns an error if an extent is zero or the data length is not
    /// `rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadsplit_core::Grid;
    ///
    /// let grid = Grid::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(grid.get(1, 0).unwrap(), 3.0);
    /// ```
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                rows,
                cols,
                rows * cols
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a grid from a list of equal-length rows
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, no columns, or the rows are
    /// ragged.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidDimension {
                rows: nrows,
                cols: ncols,
            });
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    ncols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            data,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the sample at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    /// Set the sample at `(row, col)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the index is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Get a row of samples
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Get raw access to the sample data
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Borrow the whole grid as a view
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self)
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

impl GridSource for Grid {
    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn slice(&self, rows: Range<usize>, cols: Range<usize>) -> Result<Self> {
        check_window(&rows, &cols, self.shape())?;
        let mut data = Vec::with_capacity(rows.len() * cols.len());
        for r in rows.clone() {
            data.extend_from_slice(&self.row(r)[cols.clone()]);
        }
        Ok(Self {
            rows: rows.len(),
            cols: cols.len(),
            data,
        })
    }

    fn values(&self) -> Vec<f64> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        // 3x4:
        //  0  1  2  3
        //  4  5  6  7
        //  8  9 10 11
        Grid::from_data(3, 4, (0..12).map(|v| v as f64).collect()).unwrap()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.shape(), (2, 3));
        assert!(grid.data().iter().all(|&v| v == 0.0));

        let grid = Grid::new_with_value(2, 2, 1.5).unwrap();
        assert!(grid.data().iter().all(|&v| v == 1.5));
    }

    #[test]
    fn test_grid_invalid_dimensions() {
        assert!(Grid::new(0, 3).is_err());
        assert!(Grid::new(3, 0).is_err());
        assert!(Grid::from_data(2, 2, vec![1.0; 3]).is_err());
        assert!(Grid::from_rows::<Vec<f64>>(&[]).is_err());
        assert!(Grid::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_grid_access() {
        let mut grid = sample_grid();
        assert_eq!(grid.get(1, 2).unwrap(), 6.0);
        assert_eq!(grid.row(2), &[8.0, 9.0, 10.0, 11.0]);
        grid.set(0, 0, -1.0).unwrap();
        assert_eq!(grid.get(0, 0).unwrap(), -1.0);
        assert!(grid.get(3, 0).is_err());
        assert!(grid.set(0, 4, 0.0).is_err());
    }

    #[test]
    fn test_grid_from_rows() {
        let grid = Grid::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(grid.shape(), (2, 2));
        assert_eq!(grid.data(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_grid_slice_copies_window() {
        let grid = sample_grid();
        let s = grid.slice(1..3, 1..3).unwrap();
        assert_eq!(s.shape(), (2, 2));
        assert_eq!(s.values(), vec![5.0, 6.0, 9.0, 10.0]);
    }

    #[test]
    fn test_grid_slice_empty_and_out_of_bounds() {
        let grid = sample_grid();
        let s = grid.slice(1..1, 0..4).unwrap();
        assert!(s.is_empty());
        assert!(s.values().is_empty());

        assert!(grid.slice(0..4, 0..1).is_err());
        assert!(grid.slice(0..1, 2..5).is_err());
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = grid.slice(2..1, 0..1);
        assert!(reversed.is_err());
    }
}
