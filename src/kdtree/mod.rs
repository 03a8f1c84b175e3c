mod batch;
mod nearest;
mod node;

pub use node::{KdTree, Node};

use crate::{GeometryError, Point, Rect};
use nearest::Candidates;
use std::fmt;
use std::iter::FromIterator;

// height from which sorted-looking input is reported
const DEGENERATE_HEIGHT: usize = 1 << 10;

/// Set of distinct points indexed by a 2d-tree.
///
/// Queries take `&self` and never mutate, so any number of them may run concurrently while no
/// insertion is in flight.
#[derive(Default)]
pub struct PointSet {
    tree: KdTree,
    // insertion order, also the number of distinct points
    points: Vec<Point>,
    bounds: Option<Rect>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest rectangle covering every stored point, `None` while empty
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Number of levels of the underlying tree
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    pub fn tree(&self) -> &KdTree {
        &self.tree
    }

    /// Stored points in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Insert `point` unless an equal point is already stored.
    ///
    /// Returns whether the point was added. Fails on NaN or infinite coordinates.
    pub fn put(&mut self, point: Point) -> Result<bool, GeometryError> {
        if !point.is_finite() {
            return Err(GeometryError::NonFinite {
                x: point.x(),
                y: point.y(),
            });
        }
        if self.contains(&point) {
            return Ok(false);
        }

        let previous_height = self.tree.height();
        let depth = self.tree.insert(point, self.points.len());
        log::trace!("put {} at depth {}", point, depth);
        let height = self.tree.height();
        if height > previous_height && height >= DEGENERATE_HEIGHT && height.is_power_of_two() {
            log::warn!(
                "2d-tree reached height {} with {} points, insertion order is likely sorted",
                height,
                self.points.len() + 1
            );
        }

        self.points.push(point);
        self.bounds = Some(match self.bounds {
            Some(bounds) => bounds.expanded_to(&point),
            None => Rect::at(point),
        });
        Ok(true)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.tree.find(point).is_some()
    }

    /// Every stored point lying in `rect`, edges included. The order is unspecified.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut out = Vec::new();
        self.range_into(rect, &mut out);
        out
    }

    /// Like [`PointSet::range`] but appends to `out`
    pub fn range_into(&self, rect: &Rect, out: &mut Vec<Point>) {
        let (root, bounds) = match (self.tree.root(), self.bounds) {
            (Some(root), Some(bounds)) => (root, bounds),
            _ => return,
        };
        if !bounds.intersects(rect) {
            return;
        }

        let mut stack = vec![(root, *rect)];
        while let Some((node, region)) = stack.pop() {
            if region.contains(node.point()) {
                out.push(*node.point());
            }
            let (low, high) = region.split(node.axis(), node.split_value());
            if let (Some(child), Some(high)) = (node.right(), high) {
                stack.push((child, high));
            }
            if let (Some(child), Some(low)) = (node.left(), low) {
                stack.push((child, low));
            }
        }
    }

    /// The stored point closest to `query`, `None` while empty or when `query` is not finite.
    ///
    /// Among equally distant points the first one met in a left-first walk wins.
    pub fn nearest(&self, query: &Point) -> Option<Point> {
        if !finite_query(query) {
            return None;
        }
        let root = self.tree.root()?;
        let bounds = self.bounds?;

        let mut best = *root.point();
        let mut best_dist = best.distance(query);
        let mut stack = vec![(root, bounds)];
        while let Some((node, region)) = stack.pop() {
            // best may have improved since the region was pushed
            if region.distance(query) >= best_dist {
                continue;
            }
            let dist = node.point().distance(query);
            if dist < best_dist {
                best = *node.point();
                best_dist = dist;
            }

            let (low, high) = region.split(node.axis(), node.split_value());
            if let (Some(child), Some(high)) = (node.right(), high) {
                if high.distance(query) < best_dist {
                    stack.push((child, high));
                }
            }
            if let (Some(child), Some(low)) = (node.left(), low) {
                if low.distance(query) < best_dist {
                    stack.push((child, low));
                }
            }
        }
        Some(best)
    }

    /// The `k` stored points closest to `query`, nearest first.
    ///
    /// Equally distant points are ordered by insertion. Returns every point if `k >= len()`, and
    /// nothing when `query` is not finite.
    pub fn nearest_k(&self, query: &Point, k: usize) -> Vec<Point> {
        if !finite_query(query) {
            return Vec::new();
        }
        let k = k.min(self.len());
        let (root, bounds) = match (self.tree.root(), self.bounds) {
            (Some(root), Some(bounds)) if k > 0 => (root, bounds),
            _ => return Vec::new(),
        };

        let mut candidates = Candidates::new(k);
        let mut stack = vec![(root, bounds)];
        while let Some((node, region)) = stack.pop() {
            if !candidates.admits(region.distance(query)) {
                continue;
            }
            candidates.offer(node, node.point().distance(query));

            let (low, high) = region.split(node.axis(), node.split_value());
            if let (Some(child), Some(high)) = (node.right(), high) {
                if candidates.admits(high.distance(query)) {
                    stack.push((child, high));
                }
            }
            if let (Some(child), Some(low)) = (node.left(), low) {
                if candidates.admits(low.distance(query)) {
                    stack.push((child, low));
                }
            }
        }
        candidates.into_sorted_points()
    }
}

/// NaN distances defeat pruning and comparison alike, so such queries are refused up front.
fn finite_query(query: &Point) -> bool {
    if query.is_finite() {
        return true;
    }
    log::warn!(
        "refusing nearest query: {}",
        GeometryError::NonFinite {
            x: query.x(),
            y: query.y()
        }
    );
    false
}

impl Clone for PointSet {
    /// Replays the insertions, which rebuilds the same tree shape.
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Point> for PointSet {
    /// Panics on points with non-finite coordinates.
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point>,
    {
        let before = self.len();
        let mut offered = 0usize;
        for p in it {
            offered += 1;
            if let Err(err) = self.put(p) {
                panic!("invalid point in extend: {}", err);
            }
        }
        log::debug!(
            "extended point set with {} of {} offered points, height {}",
            self.len() - before,
            offered,
            self.height()
        );
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Point>,
    {
        let mut res = Self::new();
        res.extend(it);
        res
    }
}

impl fmt::Debug for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointSet")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("bounds", &self.bounds)
            .finish()
    }
}

impl fmt::Display for PointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "}}")
    }
}
