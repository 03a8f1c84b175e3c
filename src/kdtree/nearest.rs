use super::Node;
use crate::Point;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist: OrderedFloat<f64>,
    ordinal: usize,
    point: Point,
}

impl Candidate {
    fn key(&self) -> (OrderedFloat<f64>, usize) {
        (self.dist, self.ordinal)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// The best `capacity` points seen so far, ranked by distance then insertion order.
///
/// A max-heap, so the worst kept candidate is on top and is the one evicted.
#[derive(Debug)]
pub(super) struct Candidates {
    capacity: usize,
    heap: BinaryHeap<Candidate>,
}

impl Candidates {
    pub(super) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Whether something at `dist` could still make it into the set.
    /// Ties are admitted since an earlier inserted point wins them.
    pub(super) fn admits(&self, dist: f64) -> bool {
        match self.heap.peek() {
            Some(worst) if self.is_full() => OrderedFloat(dist) <= worst.dist,
            _ => true,
        }
    }

    pub(super) fn offer(&mut self, node: &Node, dist: f64) {
        let candidate = Candidate {
            dist: OrderedFloat(dist),
            ordinal: node.ordinal(),
            point: *node.point(),
        };
        if !self.is_full() {
            self.heap.push(candidate);
            return;
        }
        let replace = match self.heap.peek() {
            Some(worst) => candidate < *worst,
            None => false,
        };
        if replace {
            self.heap.pop();
            self.heap.push(candidate);
        }
    }

    /// Kept points, nearest first
    pub(super) fn into_sorted_points(self) -> Vec<Point> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| c.point)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdtree::KdTree;

    #[test]
    fn keeps_the_closest_and_breaks_ties_by_ordinal() {
        let mut tree = KdTree::new();
        let points = [
            Point::new(3.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(2.0, 0.0),
            Point::new(-1.0, 0.0),
        ];
        for (i, p) in points.iter().enumerate() {
            tree.insert(*p, i);
        }

        let origin = Point::new(0.0, 0.0);
        let mut candidates = Candidates::new(3);
        let mut stack = vec![tree.root().unwrap()];
        while let Some(node) = stack.pop() {
            candidates.offer(node, node.point().distance(&origin));
            stack.extend(node.left());
            stack.extend(node.right());
        }

        assert!(candidates.admits(1.0));
        assert!(!candidates.admits(1.5));
        // three points at distance 1, ordered by insertion
        assert_eq!(
            candidates.into_sorted_points(),
            vec![Point::new(1.0, 0.0), Point::new(0.0, 1.0), Point::new(-1.0, 0.0)]
        );
    }
}
