//! BoundingBox, TiledBoundingBox - Rectangle regions
//!
//! A `BoundingBox` is described by its left/right x and top/bottom y
//! edges. Two orientations are used in this workspace:
//!
//! - **Cartesian** boxes (`by < ty`) cover continuous coordinate space and
//!   are what point trees index. [`BoundingBox::new`] only builds these.
//! - **Grid** boxes (`ty < by`) address cells of a dense grid, with the
//!   row index growing downward from the top edge. They come from
//!   [`BoundingBox::from_grid_dimensions`] and are split and truncated
//!   but never used with [`BoundingBox::contains`].
//!
//! Containment is half-open on both axes, so the four quadrants produced
//! by [`BoundingBox::split`] partition their parent exactly.

mod tiled;

pub use tiled::{Quadrant, TiledBoundingBox};

use crate::error::{Error, Result};
use crate::point::Point;
use std::fmt;
use std::ops::Range;

/// An axis-aligned rectangle given by its four edges.
///
/// This is a small `Copy` type; splitting produces new boxes rather than
/// mutating the parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    lx: f64,
    rx: f64,
    ty: f64,
    by: f64,
}

impl BoundingBox {
    /// Create a Cartesian box
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBoundingBox`] unless every edge is finite,
    /// `lx < rx` and `by < ty`.
    pub fn new(lx: f64, rx: f64, ty: f64, by: f64) -> Result<Self> {
        let bbox = Self { lx, rx, ty, by };
        if !bbox.is_valid() {
            return Err(Error::InvalidBoundingBox { lx, rx, ty, by });
        }
        Ok(bbox)
    }

    /// Create a box without validation
    pub const fn new_unchecked(lx: f64, rx: f64, ty: f64, by: f64) -> Self {
        Self { lx, rx, ty, by }
    }

    /// Create the root box addressing a `rows` x `cols` grid
    ///
    /// The result is `{lx: 0, rx: cols, ty: 0, by: rows}`: the top edge is
    /// the grid's first row and rows grow toward the bottom edge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either extent is zero.
    pub fn from_grid_dimensions(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimension { rows, cols });
        }
        Ok(Self::new_unchecked(0.0, cols as f64, 0.0, rows as f64))
    }

    /// Left x coordinate
    #[inline]
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Right x coordinate
    #[inline]
    pub fn rx(&self) -> f64 {
        self.rx
    }

    /// Top y coordinate
    #[inline]
    pub fn ty(&self) -> f64 {
        self.ty
    }

    /// Bottom y coordinate
    #[inline]
    pub fn by(&self) -> f64 {
        self.by
    }

    /// Check the Cartesian invariant: finite edges, `lx < rx`, `by < ty`
    pub fn is_valid(&self) -> bool {
        self.lx.is_finite()
            && self.rx.is_finite()
            && self.ty.is_finite()
            && self.by.is_finite()
            && self.lx < self.rx
            && self.by < self.ty
    }

    /// Horizontal extent
    #[inline]
    pub fn width(&self) -> f64 {
        (self.rx - self.lx).abs()
    }

    /// Vertical extent
    #[inline]
    pub fn height(&self) -> f64 {
        (self.ty - self.by).abs()
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center of the box as `(x, y)`
    #[inline]
    pub fn mid(&self) -> (f64, f64) {
        ((self.lx + self.rx) / 2.0, (self.ty + self.by) / 2.0)
    }

    /// Check if a point is inside the box
    ///
    /// The test is half-open: `lx <= x < rx` and `by <= y < ty`.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        let (x, y) = (point.x(), point.y());
        x >= self.lx && x < self.rx && y >= self.by && y < self.ty
    }

    /// Split into four equal quadrants around the midpoint
    pub fn split(&self) -> TiledBoundingBox {
        let (mx, my) = self.mid();
        TiledBoundingBox {
            nw: Self::new_unchecked(self.lx, mx, self.ty, my),
            ne: Self::new_unchecked(mx, self.rx, self.ty, my),
            se: Self::new_unchecked(mx, self.rx, my, self.by),
            sw: Self::new_unchecked(self.lx, mx, my, self.by),
        }
    }

    /// Truncate every edge toward zero
    ///
    /// Used for boxes that address grid cells. Truncating twice gives the
    /// same box as truncating once.
    pub fn to_integer_bounds(&self) -> Self {
        Self::new_unchecked(
            self.lx.trunc(),
            self.rx.trunc(),
            self.ty.trunc(),
            self.by.trunc(),
        )
    }

    /// Row and column index ranges of a grid box
    ///
    /// Rows run `ty..by` and columns `lx..rx`. Negative edges clamp to
    /// zero and a reversed range collapses to an empty one.
    pub fn grid_ranges(&self) -> (Range<usize>, Range<usize>) {
        let b = self.to_integer_bounds();
        (index_range(b.ty, b.by), index_range(b.lx, b.rx))
    }

    /// Number of `(rows, cols)` a grid box covers
    pub fn grid_extent(&self) -> (usize, usize) {
        let (rows, cols) = self.grid_ranges();
        (rows.len(), cols.len())
    }

    /// Corner coordinates, clockwise from the top-left
    ///
    /// `[(lx, ty), (rx, ty), (rx, by), (lx, by)]`, enough for a renderer
    /// to draw the outline.
    pub fn geometry(&self) -> [(f64, f64); 4] {
        [
            (self.lx, self.ty),
            (self.rx, self.ty),
            (self.rx, self.by),
            (self.lx, self.by),
        ]
    }
}

fn index_range(start: f64, end: f64) -> Range<usize> {
    let start = start.max(0.0) as usize;
    let end = end.max(0.0) as usize;
    start..end.max(start)
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BoundingBox(lx={}, rx={}, ty={}, by={})",
            self.lx, self.rx, self.ty, self.by
        )
    }
}
