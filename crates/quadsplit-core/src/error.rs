//! Error types for quadsplit-core
//!
//! Provides a unified error type for the geometry and grid types in the
//! core crate. Each variant carries the offending values so a caller can
//! report them without re-deriving anything.

use thiserror::Error;

/// quadsplit-core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Bounding box does not satisfy `lx < rx` and `by < ty`
    #[error("invalid bounding box: lx={lx}, rx={rx}, ty={ty}, by={by}")]
    InvalidBoundingBox { lx: f64, rx: f64, ty: f64, by: f64 },

    /// Grid with zero rows or columns
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },

    /// Cell index outside the grid
    #[error("index out of bounds: ({row}, {col}) in {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Slice window reaching past the grid extent
    #[error(
        "slice out of bounds: rows {row_start}..{row_end}, cols {col_start}..{col_end} in {rows}x{cols} grid"
    )]
    SliceOutOfBounds {
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
        rows: usize,
        cols: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for quadsplit-core operations
pub type Result<T> = std::result::Result<T, Error>;
