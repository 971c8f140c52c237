//! Shape introspection common to both tree kinds
//!
//! Every node of a point or region tree exposes its box, its depth and,
//! once divided, its four children in NW, NE, SE, SW order. That is all
//! an external renderer needs to draw the partition, so it is collected
//! in the [`QuadNode`] trait together with a pre-order walk, [`Nodes`].

use quadsplit_core::{BoundingBox, Quadrant};

/// A node of a quadtree.
pub trait QuadNode: Sized {
    /// Region covered by the node
    fn bounding_box(&self) -> &BoundingBox;

    /// Distance from the root (the root is at depth 0)
    fn depth(&self) -> u32;

    /// The four children in NW, NE, SE, SW order, if the node is divided
    fn children(&self) -> Option<&[Self; 4]>;

    /// Check if the node has been subdivided
    fn is_divided(&self) -> bool {
        self.children().is_some()
    }

    /// Check if the node has no children
    fn is_leaf(&self) -> bool {
        !self.is_divided()
    }

    /// Child in a given quadrant
    fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant.index()])
    }

    /// Corner coordinates of the node's box
    fn geometry(&self) -> [(f64, f64); 4] {
        self.bounding_box().geometry()
    }
}

/// Pre-order iterator over a subtree, visiting children NW, NE, SE, SW.
pub struct Nodes<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: QuadNode> Nodes<'a, N> {
    /// Walk the subtree rooted at `root`
    pub fn new(root: &'a N) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'a, N: QuadNode> Iterator for Nodes<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(children) = node.children() {
            self.stack.extend(children.iter().rev());
        }
        Some(node)
    }
}
