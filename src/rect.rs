use crate::{Axis, GeometryError, Point};
use std::fmt;

/// Closed axis-aligned rectangle `[from.x, to.x] x [from.y, to.y]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    from: Point,
    to: Point,
}

impl Rect {
    /// `from` is the bottom-left corner, `to` the top-right one.
    ///
    /// Fails if either `from` coordinate exceeds its `to` counterpart, or is NaN.
    pub fn new(from: Point, to: Point) -> Result<Self, GeometryError> {
        // written so that NaN bounds fail as well
        if !(from.x() <= to.x() && from.y() <= to.y()) {
            return Err(GeometryError::InvertedRect {
                xmin: from.x(),
                xmax: to.x(),
                ymin: from.y(),
                ymax: to.y(),
            });
        }
        Ok(Self { from, to })
    }

    /// Degenerate rectangle covering exactly `point`
    pub fn at(point: Point) -> Self {
        Self {
            from: point,
            to: point,
        }
    }

    pub fn xmin(&self) -> f64 {
        self.from.x()
    }

    pub fn ymin(&self) -> f64 {
        self.from.y()
    }

    pub fn xmax(&self) -> f64 {
        self.to.x()
    }

    pub fn ymax(&self) -> f64 {
        self.to.y()
    }

    /// Return wether point is within the bounds, edges included
    pub fn contains(&self, point: &Point) -> bool {
        let [x, y] = **point;
        self.from[0] <= x && self.from[1] <= y && x <= self.to[0] && y <= self.to[1]
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.to[0] < other.from[0] || self.from[0] > other.to[0] {
            return false;
        }
        if self.to[1] < other.from[1] || self.from[1] > other.to[1] {
            return false;
        }
        true
    }

    /// Smallest distance from `point` to any point of the rectangle. Zero inside.
    pub fn distance(&self, point: &Point) -> f64 {
        let [x, y] = **point;
        let dx = (self.from[0] - x).max(x - self.to[0]).max(0.0);
        let dy = (self.from[1] - y).max(y - self.to[1]).max(0.0);
        dx.hypot(dy)
    }

    /// Smallest rectangle covering both `self` and `point`
    #[must_use]
    pub fn expanded_to(&self, point: &Point) -> Self {
        let [x, y] = **point;
        Self {
            from: Point::new(self.from[0].min(x), self.from[1].min(y)),
            to: Point::new(self.to[0].max(x), self.to[1].max(y)),
        }
    }

    /// Cut by the vertical line at `x` into the parts left and right of it.
    ///
    /// Both parts include the line. A part is `None` when the line misses the rectangle on that
    /// side, in which case the other part is the whole rectangle.
    pub fn split_x(&self, x: f64) -> (Option<Rect>, Option<Rect>) {
        self.split(Axis::X, x)
    }

    /// Cut by the horizontal line at `y` into the parts below and above it. See [`Rect::split_x`].
    pub fn split_y(&self, y: f64) -> (Option<Rect>, Option<Rect>) {
        self.split(Axis::Y, y)
    }

    pub fn split(&self, axis: Axis, value: f64) -> (Option<Rect>, Option<Rect>) {
        let i = axis as usize;
        if value < self.from[i] {
            return (None, Some(*self));
        }
        if value > self.to[i] {
            return (Some(*self), None);
        }
        let mut low = *self;
        let mut high = *self;
        low.to.0[i] = value;
        high.from.0[i] = value;
        (Some(low), Some(high))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.xmin(),
            self.xmax(),
            self.ymin(),
            self.ymax()
        )
    }
}
