use crate::{Axis, Point};
use std::fmt;

type Child = Option<Box<Node>>;

/// A stored point and the half-plane split it induces on its subtree.
///
/// Every point of the left subtree has `coord(axis)` strictly below this node's, every point of
/// the right subtree has it greater or equal.
pub struct Node {
    point: Point,
    axis: Axis,
    // position of the point in insertion order
    ordinal: usize,

    left: Child,
    right: Child,
}

impl Node {
    fn new(point: Point, axis: Axis, ordinal: usize) -> Self {
        Self {
            point,
            axis,
            ordinal,
            left: None,
            right: None,
        }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Coordinate the subtree is split at
    pub fn split_value(&self) -> f64 {
        self.point.coord(self.axis)
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Whether `point` belongs to the left subtree. Insertion and lookup must agree on this.
    pub fn goes_left(&self, point: &Point) -> bool {
        point.coord(self.axis) < self.split_value()
    }

    /// The child `point` would descend into
    pub fn child_for(&self, point: &Point) -> Option<&Node> {
        if self.goes_left(point) {
            self.left()
        } else {
            self.right()
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // children are left out, chains may be arbitrarily deep
        f.debug_struct("Node")
            .field("point", &self.point)
            .field("axis", &self.axis)
            .field("ordinal", &self.ordinal)
            .field("has_left", &self.left.is_some())
            .field("has_right", &self.right.is_some())
            .finish()
    }
}

/// Unbalanced 2d-tree. Owns every node through its root.
#[derive(Default)]
pub struct KdTree {
    root: Child,
    height: usize,
}

impl KdTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Number of levels, 0 for the empty tree
    pub fn height(&self) -> usize {
        self.height
    }

    /// Attach `point` as a new leaf below the node whose half-plane it falls into.
    ///
    /// Does not check for duplicates. Returns the depth of the new node, the root being at 0.
    pub fn insert(&mut self, point: Point, ordinal: usize) -> usize {
        let mut depth = 0;
        let mut axis = Axis::X;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            axis = node.axis.next();
            depth += 1;
            slot = if node.goes_left(&point) {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(point, axis, ordinal)));
        self.height = self.height.max(depth + 1);
        depth
    }

    /// Walk the insertion path of `point` and return the node holding it, if any
    pub fn find(&self, point: &Point) -> Option<&Node> {
        let mut current = self.root();
        while let Some(node) = current {
            if node.point == *point {
                return Some(node);
            }
            current = node.child_for(point);
        }
        None
    }
}

impl Drop for KdTree {
    fn drop(&mut self) {
        // the default recursive drop would overflow the stack on degenerate chains
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl fmt::Debug for KdTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KdTree")
            .field("root", &self.root())
            .field("height", &self.height)
            .finish()
    }
}
