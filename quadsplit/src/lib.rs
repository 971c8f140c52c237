//! quadsplit - Adaptive point and region quadtrees
//!
//! Two spatial indexes that decide where to subdivide with a statistical
//! dispersion test instead of a fixed capacity:
//!
//! - A point quadtree that grows as `(x, y, value)` samples are inserted
//! - A region quadtree that decomposes a dense grid into homogeneous blocks
//!
//! # Example
//!
//! ```
//! use quadsplit::{BoundingBox, Grid, Point};
//! use quadsplit::tree::{DispersionConfig, PointTree, QuadNode, RegionTree, Statistic};
//!
//! let config = DispersionConfig::new()
//!     .with_statistic(Statistic::Variance)
//!     .with_threshold(1.0)
//!     .with_max_depth(4);
//!
//! let bbox = BoundingBox::new(0.0, 8.0, 8.0, 0.0).unwrap();
//! let mut points = PointTree::new(bbox, config).unwrap();
//! points.insert(Point::new(1.0, 1.0, 0.0));
//! points.insert(Point::new(6.0, 6.0, 9.0));
//! assert!(points.root().is_divided());
//!
//! let grid = Grid::new_with_value(4, 4, 2.0).unwrap();
//! let regions = RegionTree::new(grid.view(), config).unwrap();
//! assert_eq!(regions.leaf_count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use quadsplit_core::*;

// Re-export the tree crate as a module to avoid name conflicts
pub use quadsplit_tree as tree;
