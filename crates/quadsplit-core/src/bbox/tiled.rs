//! Quadrant labels and the four-box result of a split

use super::BoundingBox;
use std::fmt;

/// One of the four quadrants of a split box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Upper-left
    Nw,
    /// Upper-right
    Ne,
    /// Lower-right
    Se,
    /// Lower-left
    Sw,
}

impl Quadrant {
    /// Storage and traversal order
    pub const ALL: [Quadrant; 4] = [Quadrant::Nw, Quadrant::Ne, Quadrant::Se, Quadrant::Sw];

    /// Order in which a point tree offers a point to its children
    pub const ROUTING: [Quadrant; 4] = [Quadrant::Ne, Quadrant::Nw, Quadrant::Se, Quadrant::Sw];

    /// Position of this quadrant in a `[T; 4]` laid out in [`Quadrant::ALL`] order
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Quadrant::Nw => 0,
            Quadrant::Ne => 1,
            Quadrant::Se => 2,
            Quadrant::Sw => 3,
        }
    }

    /// Short lowercase label (`"nw"`, `"ne"`, `"se"`, `"sw"`)
    pub const fn label(self) -> &'static str {
        match self {
            Quadrant::Nw => "nw",
            Quadrant::Ne => "ne",
            Quadrant::Se => "se",
            Quadrant::Sw => "sw",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four quadrant boxes of a split, named by position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiledBoundingBox {
    pub nw: BoundingBox,
    pub ne: BoundingBox,
    pub se: BoundingBox,
    pub sw: BoundingBox,
}

impl TiledBoundingBox {
    /// Box for a quadrant
    pub fn get(&self, quadrant: Quadrant) -> &BoundingBox {
        match quadrant {
            Quadrant::Nw => &self.nw,
            Quadrant::Ne => &self.ne,
            Quadrant::Se => &self.se,
            Quadrant::Sw => &self.sw,
        }
    }

    /// Boxes in NW, NE, SE, SW order
    pub fn to_array(&self) -> [BoundingBox; 4] {
        [self.nw, self.ne, self.se, self.sw]
    }

    /// Iterate boxes in NW, NE, SE, SW order
    pub fn iter(&self) -> impl Iterator<Item = &BoundingBox> {
        Quadrant::ALL.into_iter().map(|q| self.get(q))
    }

    /// Truncate every quadrant to integer bounds
    pub fn to_integer_bounds(&self) -> Self {
        Self {
            nw: self.nw.to_integer_bounds(),
            ne: self.ne.to_integer_bounds(),
            se: self.se.to_integer_bounds(),
            sw: self.sw.to_integer_bounds(),
        }
    }
}
