//! Point - A sample located in the plane
//!
//! A `Point` is an `(x, y)` coordinate with an optional numeric value
//! attached. Point trees index points by position and split on the
//! dispersion of their values.

use std::cmp::Ordering;
use std::fmt;

/// A 2-D sample with an optional value.
///
/// Points are immutable once built. They are ordered by `x`, then `y`,
/// using IEEE total ordering so that the order is defined for every
/// float. The value breaks remaining ties (absent sorts first), which
/// keeps `Eq` and `Ord` consistent.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: f64,
    y: f64,
    value: Option<f64>,
}

impl Point {
    /// Create a point carrying a value
    pub const fn new(x: f64, y: f64, value: f64) -> Self {
        Self {
            x,
            y,
            value: Some(value),
        }
    }

    /// Create a point without a value
    pub const fn bare(x: f64, y: f64) -> Self {
        Self { x, y, value: None }
    }

    /// Create a point from an optional value
    pub const fn with_value(x: f64, y: f64, value: Option<f64>) -> Self {
        Self { x, y, value }
    }

    /// X coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Attached value, if any
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Attached value, counting an absent value as zero
    #[inline]
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Check that both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
            .then_with(|| match (self.value, other.value) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => a.total_cmp(&b),
            })
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "({}, {}, {})", self.x, self.y, v),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}
