//! quadsplit Core - Geometry and grid types for adaptive quadtrees
//!
//! This crate provides the data structures shared by the point and region
//! quadtrees in `quadsplit-tree`:
//!
//! - [`Point`] - A 2-D sample with an optional value
//! - [`BoundingBox`] / [`TiledBoundingBox`] / [`Quadrant`] - Rectangles and
//!   their four-way split
//! - [`Grid`] / [`GridView`] / [`GridSource`] - Dense sample grids and
//!   rectangular slicing
//!
//! # Example
//!
//! ```
//! use quadsplit_core::{BoundingBox, Point};
//!
//! let bbox = BoundingBox::new(0.0, 4.0, 4.0, 0.0).unwrap();
//! let tiles = bbox.split();
//! assert!(tiles.nw.contains(&Point::new(1.0, 3.0, 0.0)));
//! ```

pub mod bbox;
pub mod error;
pub mod grid;
pub mod point;

pub use bbox::{BoundingBox, Quadrant, TiledBoundingBox};
pub use error::{Error, Result};
pub use grid::{Grid, GridSource, GridView};
pub use point::Point;
