//! quadsplit-tree - Adaptive quadtrees driven by a dispersion test
//!
//! This crate provides two quadtrees that subdivide space where the data
//! is heterogeneous rather than by a fixed fanout:
//!
//! - **Point tree** ([`PointTree`]) - Incrementally indexes scattered
//!   `(x, y, value)` samples
//! - **Region tree** ([`RegionTree`]) - Decomposes a dense grid into
//!   homogeneous rectangular blocks in one pass
//!
//! Both share the same subdivision rule, configured by
//! [`DispersionConfig`]: a node stops splitting once the dispersion of its
//! values is at most the threshold or it has reached the depth limit.
//!
//! # Examples
//!
//! ## Indexing points
//!
//! ```
//! use quadsplit_core::{BoundingBox, Point, Quadrant};
//! use quadsplit_tree::{DispersionConfig, PointTree, QuadNode, Statistic};
//!
//! let bbox = BoundingBox::new(0.0, 4.0, 4.0, 0.0).unwrap();
//! let config = DispersionConfig::new()
//!     .with_statistic(Statistic::Variance)
//!     .with_threshold(0.08)
//!     .with_max_depth(5);
//! let mut tree = PointTree::new(bbox, config).unwrap();
//!
//! tree.insert(Point::new(1.0, 1.0, 0.0));
//! tree.insert(Point::new(3.0, 3.0, 10.0));
//! tree.insert(Point::new(1.0, 3.0, 0.0));
//!
//! let nw = tree.root().child(Quadrant::Nw).unwrap();
//! assert_eq!(nw.points(), &[Point::new(1.0, 3.0, 0.0)]);
//! ```
//!
//! ## Decomposing a grid
//!
//! ```
//! use quadsplit_core::Grid;
//! use quadsplit_tree::{DispersionConfig, QuadNode, RegionTree};
//!
//! let mut grid = Grid::new_with_value(8, 8, 1.0).unwrap();
//! grid.set(0, 0, 50.0).unwrap();
//!
//! let tree = RegionTree::new(grid.view(), DispersionConfig::default()).unwrap();
//! assert!(tree.root().is_divided());
//! assert!(tree.depth() <= tree.config().max_depth);
//! ```

pub mod dispersion;
pub mod error;
pub mod node;
pub mod point_tree;
pub mod region_tree;

// Re-export core types
pub use quadsplit_core;

// Re-export error types
pub use error::{TreeError, TreeResult};

// Re-export dispersion types
pub use dispersion::{DispersionConfig, Statistic};

// Re-export node introspection
pub use node::{Nodes, QuadNode};

// Re-export tree types and functions
pub use point_tree::{PointNode, PointTree};
pub use region_tree::{RegionNode, RegionTree, split_block};
