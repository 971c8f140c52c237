//! Point quadtree - Incremental indexing of scattered samples
//!
//! A [`PointTree`] starts as a single leaf covering a caller-supplied
//! Cartesian box. Each inserted point walks down from the root. At every
//! node on its path the point is appended to that node's own list, so an
//! ancestor keeps every point that ever passed through it and its
//! dispersion is computed over all of them.
//!
//! Once a node holds two or more points, the dispersion of their values
//! is tested. A leaf whose values are too spread out (and which is above
//! the depth limit) is divided into four children. A divided node then
//! hands the point to the first child, in NE, NW, SE, SW order, whose box
//! contains it.
//!
//! # Examples
//!
//! ```
//! use quadsplit_core::{BoundingBox, Point};
//! use quadsplit_tree::{DispersionConfig, PointTree, QuadNode, Statistic};
//!
//! let bbox = BoundingBox::new(0.0, 4.0, 4.0, 0.0).unwrap();
//! let config = DispersionConfig::new()
//!     .with_statistic(Statistic::Variance)
//!     .with_threshold(0.08)
//!     .with_max_depth(5);
//! let mut tree = PointTree::new(bbox, config).unwrap();
//!
//! assert!(tree.insert(Point::new(1.0, 1.0, 0.0)));
//! assert!(tree.insert(Point::new(3.0, 3.0, 10.0)));
//! assert!(tree.root().is_divided());
//! assert!(!tree.insert(Point::new(5.0, 1.0, 0.0)));
//! ```

use crate::dispersion::{DispersionConfig, Statistic};
use crate::error::{TreeError, TreeResult};
use crate::node::{Nodes, QuadNode};
use log::{debug, trace};
use quadsplit_core::{BoundingBox, Point, Quadrant};
use std::fmt;

/// A node of a [`PointTree`].
#[derive(Debug, Clone)]
pub struct PointNode {
    bbox: BoundingBox,
    depth: u32,
    points: Vec<Point>,
    children: Option<Box<[PointNode; 4]>>,
}

impl PointNode {
    fn new(bbox: BoundingBox, depth: u32) -> Self {
        Self {
            bbox,
            depth,
            points: Vec::new(),
            children: None,
        }
    }

    /// Points that have passed through this node, in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points that have passed through this node
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Dispersion of this node's values under `statistic`
    ///
    /// Absent values count as zero.
    pub fn dispersion(&self, statistic: &Statistic) -> f64 {
        statistic.compute(&self.values())
    }

    fn values(&self) -> Vec<f64> {
        self.points.iter().map(Point::value_or_zero).collect()
    }

    // False once halving no longer lands strictly inside the box in f64
    fn can_divide(&self) -> bool {
        let (mx, my) = self.bbox.mid();
        self.bbox.lx() < mx && mx < self.bbox.rx() && self.bbox.by() < my && my < self.bbox.ty()
    }

    fn divide(&mut self) {
        let depth = self.depth + 1;
        let tiles = self.bbox.split().to_array();
        self.children = Some(Box::new(tiles.map(|bbox| PointNode::new(bbox, depth))));
    }

    fn insert(&mut self, point: Point, config: &DispersionConfig) -> bool {
        if !self.bbox.contains(&point) {
            return false;
        }

        self.points.push(point);
        if self.points.len() < 2 {
            return true;
        }

        if self.children.is_none() {
            let dispersion = config.dispersion(&self.values());
            if config.should_subdivide(dispersion, self.depth) && self.can_divide() {
                debug!(
                    "dividing point node at depth {} ({}): {} {} > {}",
                    self.depth,
                    self.bbox,
                    config.statistic,
                    dispersion,
                    config.threshold
                );
                self.divide();
            }
        }

        if let Some(children) = self.children.as_deref_mut() {
            for quadrant in Quadrant::ROUTING {
                if children[quadrant.index()].insert(point, config) {
                    break;
                }
            }
        }
        true
    }
}

impl QuadNode for PointNode {
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

/// Point quadtree keyed by point position and value dispersion.
#[derive(Debug, Clone)]
pub struct PointTree {
    root: PointNode,
    config: DispersionConfig,
}

impl PointTree {
    /// Create an empty tree covering `root_bbox`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidConfiguration`] if `config` does not
    /// validate or `root_bbox` is not a valid Cartesian box (for example a
    /// grid-oriented box).
    pub fn new(root_bbox: BoundingBox, config: DispersionConfig) -> TreeResult<Self> {
        config.validate()?;
        if !root_bbox.is_valid() {
            return Err(TreeError::InvalidConfiguration(format!(
                "root {} must satisfy lx < rx and by < ty",
                root_bbox
            )));
        }

        debug!(
            "new point tree over {} ({} <= {}, max depth {})",
            root_bbox, config.statistic, config.threshold, config.max_depth
        );
        Ok(Self {
            root: PointNode::new(root_bbox, 0),
            config,
        })
    }

    /// Insert a point
    ///
    /// Returns `false`, leaving the tree untouched, if the point lies
    /// outside the root box. Otherwise returns `true`.
    pub fn insert(&mut self, point: Point) -> bool {
        let accepted = self.root.insert(point, &self.config);
        if !accepted {
            trace!("rejected {} outside {}", point, self.root.bbox);
        }
        accepted
    }

    /// Insert a point, reporting a rejection as an error
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::OutOfBounds`] if the point lies outside the
    /// root box.
    pub fn try_insert(&mut self, point: Point) -> TreeResult<()> {
        if self.insert(point) {
            Ok(())
        } else {
            Err(TreeError::OutOfBounds {
                x: point.x(),
                y: point.y(),
            })
        }
    }

    /// Insert every point from `points`, returning how many were accepted
    pub fn insert_all<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
        points.into_iter().filter(|&p| self.insert(p)).count()
    }

    /// Root node
    pub fn root(&self) -> &PointNode {
        &self.root
    }

    /// Box covered by the tree
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.root.bbox
    }

    /// Options the tree was built with
    pub fn config(&self) -> &DispersionConfig {
        &self.config
    }

    /// Number of points accepted so far
    pub fn len(&self) -> usize {
        self.root.points.len()
    }

    /// Check if no point has been accepted
    pub fn is_empty(&self) -> bool {
        self.root.points.is_empty()
    }

    /// Pre-order walk over all nodes
    pub fn nodes(&self) -> Nodes<'_, PointNode> {
        Nodes::new(&self.root)
    }

    /// All leaf nodes, NW, NE, SE, SW first
    pub fn leaves(&self) -> impl Iterator<Item = &PointNode> {
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

fn fmt_point_node(
    node: &PointNode,
    label: Option<Quadrant>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let indent = "  ".repeat(node.depth as usize);
    write!(f, "{}", indent)?;
    if let Some(q) = label {
        write!(f, "{}: ", q)?;
    }
    let points = node
        .points
        .iter()
        .map(Point::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(f, "{} [{}]", node.bbox, points)?;

    if let Some(children) = node.children.as_deref() {
        for q in Quadrant::ALL {
            fmt_point_node(&children[q.index()], Some(q), f)?;
        }
    }
    Ok(())
}

impl fmt::Display for PointNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point_node(self, None, f)
    }
}

impl fmt::Display for PointTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_point_node(&self.root, None, f)
    }
}
