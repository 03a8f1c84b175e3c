//! 2d-tree point set.
//!
//! Stores distinct points of the plane in an unbalanced binary partition tree whose split axis
//! alternates between x and y with depth. Answers membership, axis-aligned range and
//! nearest-neighbour queries by pruning subtrees whose region cannot hold an answer.
//!
//! # Contracts:
//! - Point coordinates must be finite. [`PointSet::put`] rejects anything else.
//! - The tree is never rebalanced, its shape depends on insertion order. Sorted input degrades
//!   every operation to a linear walk, but no walk recurses, so depth is bounded by memory only.
//!
//! ```
//! use kd_pointset::{Point, PointSet, Rect};
//!
//! let mut set = PointSet::new();
//! for p in [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0)].iter() {
//!     set.put(Point::new(p.0, p.1)).unwrap();
//! }
//!
//! let rect = Rect::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap();
//! assert_eq!(set.range(&rect).len(), 2);
//! assert_eq!(set.nearest(&Point::new(0.4, 0.4)), Some(Point::new(0.0, 0.0)));
//! ```
mod error;
pub mod kdtree;
pub mod rect;

pub use error::GeometryError;
pub use kdtree::PointSet;
pub use rect::Rect;

use std::fmt;
use std::ops::Deref;

/// Coordinate a tree level partitions on
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    /// The discriminant of the level below
    pub fn next(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Ordered lexicographically by x, then y.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Point(pub [f64; 2]);

impl Deref for Point {
    type Target = [f64; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    /// Same as `new` but refuses NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, GeometryError> {
        let p = Self::new(x, y);
        if p.is_finite() {
            Ok(p)
        } else {
            Err(GeometryError::NonFinite { x, y })
        }
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn coord(&self, axis: Axis) -> f64 {
        self.0[axis as usize]
    }

    pub fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Euclidean distance
    pub fn distance(&self, rhs: &Self) -> f64 {
        (self.x() - rhs.x()).hypot(self.y() - rhs.y())
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
