//! Region quadtree - Decomposition of a dense grid into homogeneous blocks
//!
//! A [`RegionTree`] is built in one pass from a grid. The root box is
//! derived from the grid's extent in grid orientation (row 0 at the top
//! edge), and every node holds the block of samples its box addresses.
//!
//! A node whose block disperses more than the threshold, and which sits
//! above the depth limit, is split at its midpoint. Quadrant boxes are
//! truncated to integer grid bounds and the block is sliced to match, so
//! with odd extents one side of a split gets the extra row or column and
//! the other may end up empty. Empty blocks and single cells always
//! become leaves, whatever the threshold.
//!
//! Divided nodes drop their block; leaves keep theirs.
//!
//! # Examples
//!
//! ```
//! use quadsplit_core::Grid;
//! use quadsplit_tree::{DispersionConfig, QuadNode, RegionTree, Statistic};
//!
//! let grid = Grid::new_with_value(4, 4, 3.0).unwrap();
//! let config = DispersionConfig::new()
//!     .with_statistic(Statistic::Variance)
//!     .with_threshold(1.0);
//! let tree = RegionTree::new(grid.view(), config).unwrap();
//! assert!(tree.root().is_leaf());
//! assert_eq!(tree.node_count(), 1);
//! ```

use crate::dispersion::DispersionConfig;
use crate::error::{TreeError, TreeResult};
use crate::node::{Nodes, QuadNode};
use log::{debug, trace};
use quadsplit_core::{BoundingBox, Error, GridSource, Quadrant};
use std::fmt;

/// A node of a [`RegionTree`].
#[derive(Debug, Clone)]
pub struct RegionNode<G> {
    bbox: BoundingBox,
    depth: u32,
    block: Option<G>,
    dispersion: Option<f64>,
    children: Option<Box<[RegionNode<G>; 4]>>,
}

impl<G: GridSource> RegionNode<G> {
    fn build(
        block: G,
        bbox: BoundingBox,
        depth: u32,
        config: &DispersionConfig,
    ) -> TreeResult<Self> {
        if block.is_empty() {
            trace!("empty block at depth {} ({}), leaf", depth, bbox);
            return Ok(Self::leaf(block, bbox, depth, None));
        }

        let dispersion = config.dispersion(&block.values());
        let (rows, cols) = block.shape();
        if rows <= 1 && cols <= 1 {
            // A single cell splits into a copy of itself
            trace!("single cell at depth {} ({}), leaf", depth, bbox);
            return Ok(Self::leaf(block, bbox, depth, Some(dispersion)));
        }
        if config.should_stop(dispersion, depth) {
            return Ok(Self::leaf(block, bbox, depth, Some(dispersion)));
        }

        debug!(
            "dividing {}x{} block at depth {} ({}): {} {} > {}",
            rows, cols, depth, bbox, config.statistic, dispersion, config.threshold
        );

        let [nw, ne, se, sw] = split_block(&block, &bbox)?;
        drop(block);

        let child_depth = depth + 1;
        let children = [
            Self::build(nw.1, nw.0, child_depth, config)?,
            Self::build(ne.1, ne.0, child_depth, config)?,
            Self::build(se.1, se.0, child_depth, config)?,
            Self::build(sw.1, sw.0, child_depth, config)?,
        ];

        Ok(Self {
            bbox,
            depth,
            block: None,
            dispersion: Some(dispersion),
            children: Some(Box::new(children)),
        })
    }

    fn leaf(block: G, bbox: BoundingBox, depth: u32, dispersion: Option<f64>) -> Self {
        Self {
            bbox,
            depth,
            block: Some(block),
            dispersion,
            children: None,
        }
    }

    /// Samples held by a leaf; `None` once the node has been divided
    pub fn block(&self) -> Option<&G> {
        self.block.as_ref()
    }

    /// Dispersion of the node's block when it was decomposed
    ///
    /// `None` for leaves whose block is empty.
    pub fn dispersion(&self) -> Option<f64> {
        self.dispersion
    }

    /// Mean of the samples a leaf holds
    ///
    /// `None` for divided nodes and empty blocks.
    pub fn mean(&self) -> Option<f64> {
        let values = self.block.as_ref()?.values();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// `(rows, cols)` of the grid region the node covers
    pub fn grid_extent(&self) -> (usize, usize) {
        self.bbox.grid_extent()
    }
}

impl<G> QuadNode for RegionNode<G> {
    fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    fn depth(&self) -> u32 {
        self.depth
    }

    fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }
}

/// Split a block along the quadrants of its grid box
///
/// `bbox` is the block's grid box in absolute grid coordinates. The
/// quadrant boxes are truncated to integer bounds and each sub-block is
/// sliced relative to the block's own origin. The result is in NW, NE,
/// SE, SW order; placed back at their boxes the four sub-blocks rebuild
/// the block exactly.
///
/// # Errors
///
/// Returns [`TreeError::Core`] if the block's shape doesn't match the
/// box's grid extent.
pub fn split_block<G: GridSource>(
    block: &G,
    bbox: &BoundingBox,
) -> TreeResult<[(BoundingBox, G); 4]> {
    let bbox = bbox.to_integer_bounds();
    let extent = bbox.grid_extent();
    if block.shape() != extent {
        return Err(TreeError::Core(Error::InvalidParameter(format!(
            "block shape {:?} doesn't match {} extent {:?}",
            block.shape(),
            bbox,
            extent
        ))));
    }

    let (rows, cols) = bbox.grid_ranges();
    let (row0, col0) = (rows.start, cols.start);
    let tiles = bbox.split().to_integer_bounds();

    let slice = |q: Quadrant| -> TreeResult<(BoundingBox, G)> {
        let tile = *tiles.get(q);
        let (r, c) = tile.grid_ranges();
        let sub = block.slice(
            r.start.saturating_sub(row0)..r.end.saturating_sub(row0),
            c.start.saturating_sub(col0)..c.end.saturating_sub(col0),
        )?;
        Ok((tile, sub))
    };

    Ok([
        slice(Quadrant::Nw)?,
        slice(Quadrant::Ne)?,
        slice(Quadrant::Se)?,
        slice(Quadrant::Sw)?,
    ])
}

/// Region quadtree over a dense grid.
#[derive(Debug, Clone)]
pub struct RegionTree<G> {
    root: RegionNode<G>,
    config: DispersionConfig,
    shape: (usize, usize),
}

impl<G: GridSource> RegionTree<G> {
    /// Decompose `grid` into a tree
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidConfiguration`] if `config` does not
    /// validate and [`TreeError::EmptyGrid`] if the grid has no samples.
    pub fn new(grid: G, config: DispersionConfig) -> TreeResult<Self> {
        config.validate()?;
        let shape = grid.shape();
        if grid.is_empty() {
            return Err(TreeError::EmptyGrid);
        }
        let bbox = BoundingBox::from_grid_dimensions(shape.0, shape.1)?;

        debug!(
            "new region tree over {}x{} grid ({} <= {}, max depth {})",
            shape.0, shape.1, config.statistic, config.threshold, config.max_depth
        );
        let root = RegionNode::build(grid, bbox, 0, &config)?;
        Ok(Self {
            root,
            config,
            shape,
        })
    }
}

impl<G> RegionTree<G> {
    /// Root node
    pub fn root(&self) -> &RegionNode<G> {
        &self.root
    }

    /// Options the tree was built with
    pub fn config(&self) -> &DispersionConfig {
        &self.config
    }

    /// `(rows, cols)` of the decomposed grid
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Pre-order walk over all nodes
    pub fn nodes(&self) -> Nodes<'_, RegionNode<G>> {
        Nodes::new(&self.root)
    }

    /// All leaf nodes
    pub fn leaves(&self) -> impl Iterator<Item = &RegionNode<G>> {
        self.nodes().filter(|n| n.is_leaf())
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of leaf nodes
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Depth of the deepest node
    pub fn depth(&self) -> u32 {
        self.nodes().map(|n| n.depth).max().unwrap_or(0)
    }
}

fn fmt_region_node<G: GridSource>(
    node: &RegionNode<G>,
    label: Option<Quadrant>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "{}", "  ".repeat(node.depth as usize))?;
    if let Some(q) = label {
        write!(f, "{}: ", q)?;
    }
    write!(f, "depth={} dispersion=", node.depth)?;
    match node.dispersion {
        Some(d) => write!(f, "{}", d)?,
        None => write!(f, "none")?,
    }
    match &node.block {
        Some(b) => {
            let (rows, cols) = b.shape();
            writeln!(f, " block={}x{} {}", rows, cols, node.bbox)?;
        }
        None => writeln!(f, " block=none {}", node.bbox)?,
    }

    if let Some(children) = node.children.as_deref() {
        for q in Quadrant::ALL {
            fmt_region_node(&children[q.index()], Some(q), f)?;
        }
    }
    Ok(())
}

impl<G: GridSource> fmt::Display for RegionNode<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_region_node(self, None, f)
    }
}

impl<G: GridSource> fmt::Display for RegionTree<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_region_node(&self.root, None, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispersion::Statistic;
    use quadsplit_core::Grid;

    fn variance_config(threshold: f64, max_depth: u32) -> DispersionConfig {
        DispersionConfig::new()
            .with_statistic(Statistic::Variance)
            .with_threshold(threshold)
            .with_max_depth(max_depth)
    }

    fn corners_grid() -> Grid {
        let mut grid = Grid::new_with_value(4, 4, 1.0).unwrap();
        grid.set(0, 0, 100.0).unwrap();
        grid.set(3, 3, -100.0).unwrap();
        grid
    }

    #[test]
    fn test_uniform_grid_is_single_leaf() {
        let grid = Grid::new_with_value(4, 4, 7.0).unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(1.0, 5)).unwrap();
        let root = tree.root();
        assert!(root.is_leaf());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.dispersion(), Some(0.0));
        assert_eq!(root.mean(), Some(7.0));
        assert_eq!(tree.shape(), (4, 4));
    }

    #[test]
    fn test_max_depth_caps_recursion() {
        let grid = corners_grid();
        let tree = RegionTree::new(grid.view(), variance_config(0.01, 1)).unwrap();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.leaf_count(), 4);
        assert_eq!(tree.depth(), 1);

        let root = tree.root();
        assert!(root.block().is_none());
        let nw = root.child(Quadrant::Nw).unwrap();
        assert!(nw.is_leaf());
        assert_eq!(nw.block().unwrap().values(), vec![100.0, 1.0, 1.0, 1.0]);
        assert!(nw.dispersion().unwrap() > 0.01);
    }

    #[test]
    fn test_homogeneous_quadrants_stop_early() {
        // Left half 0, right half 10
        let grid = Grid::from_rows(&[
            [0.0, 0.0, 10.0, 10.0],
            [0.0, 0.0, 10.0, 10.0],
            [0.0, 0.0, 10.0, 10.0],
            [0.0, 0.0, 10.0, 10.0],
        ])
        .unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(0.5, 6)).unwrap();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.root().child(Quadrant::Ne).unwrap().mean(), Some(10.0));
        assert_eq!(tree.root().child(Quadrant::Sw).unwrap().mean(), Some(0.0));
    }

    #[test]
    fn test_owned_grid_source() {
        let tree = RegionTree::new(corners_grid(), variance_config(0.01, 1)).unwrap();
        assert_eq!(tree.node_count(), 5);
        let se = tree.root().child(Quadrant::Se).unwrap();
        assert_eq!(se.block().unwrap().data(), &[1.0, 1.0, 1.0, -100.0]);
    }

    #[test]
    fn test_new_rejects_bad_config() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(RegionTree::new(grid.view(), variance_config(1.0, 0)).is_err());
        assert!(RegionTree::new(grid.view(), variance_config(f64::INFINITY, 3)).is_err());
    }

    #[test]
    fn test_new_rejects_empty_grid() {
        let grid = Grid::new(2, 2).unwrap();
        let empty = grid.view().slice(0..0, 0..2).unwrap();
        let err = RegionTree::new(empty, variance_config(1.0, 3)).unwrap_err();
        assert!(matches!(err, TreeError::EmptyGrid));
    }

    #[test]
    fn test_single_column_produces_empty_leaves() {
        // 1 column: the western half truncates to zero width
        let grid = Grid::from_data(4, 1, vec![0.0, 10.0, 20.0, 30.0]).unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(0.0, 1)).unwrap();
        let root = tree.root();
        let nw = root.child(Quadrant::Nw).unwrap();
        assert!(nw.is_leaf());
        assert!(nw.block().unwrap().is_empty());
        assert_eq!(nw.dispersion(), None);
        assert_eq!(nw.mean(), None);

        let ne = root.child(Quadrant::Ne).unwrap();
        assert_eq!(ne.block().unwrap().values(), vec![0.0, 10.0]);
        assert_eq!(ne.grid_extent(), (2, 1));
    }

    #[test]
    fn test_split_block_rejects_mismatched_shape() {
        let grid = Grid::new(4, 4).unwrap();
        let bbox = BoundingBox::from_grid_dimensions(2, 4).unwrap();
        assert!(split_block(&grid.view(), &bbox).is_err());
    }

    #[test]
    fn test_display_dump() {
        let grid = Grid::new_with_value(2, 2, 1.0).unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(1.0, 3)).unwrap();
        assert_eq!(
            tree.to_string(),
            "depth=0 dispersion=0 block=2x2 BoundingBox(lx=0, rx=2, ty=0, by=2)\n"
        );
    }

    #[test]
    fn test_single_cell_is_leaf_below_any_threshold() {
        let grid = Grid::new_with_value(1, 1, 4.0).unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(-1.0, 6)).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.root().dispersion(), Some(0.0));

        // Single cells reached by splitting stop as well
        let grid = Grid::new_with_value(2, 2, 4.0).unwrap();
        let tree = RegionTree::new(grid.view(), variance_config(-1.0, 1_000_000)).unwrap();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 1);
        assert!(tree.leaves().all(|n| n.grid_extent() == (1, 1)));
    }
}
