//! Error types for quadsplit-tree

use thiserror::Error;

/// Errors that can occur while building or filling a quadtree
#[derive(Debug, Error)]
pub enum TreeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadsplit_core::Error),

    /// Invalid configuration or root bounding box
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Point outside the tree's root bounding box
    #[error("point out of bounds: ({x}, {y})")]
    OutOfBounds { x: f64, y: f64 },

    /// Grid with no samples
    #[error("empty grid: no samples to decompose")]
    EmptyGrid,
}

/// Result type for tree operations
pub type TreeResult<T> = Result<T, TreeError>;
