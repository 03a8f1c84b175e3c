//! Many read-only queries against one set, spread over the rayon thread pool.
//!
//! Results come back in query order and equal the sequential answers.

use super::PointSet;
use crate::{Point, Rect};
use rayon::prelude::*;

impl PointSet {
    pub fn nearest_batch(&self, queries: &[Point]) -> Vec<Option<Point>> {
        queries.par_iter().map(|q| self.nearest(q)).collect()
    }

    pub fn nearest_k_batch(&self, queries: &[Point], k: usize) -> Vec<Vec<Point>> {
        queries.par_iter().map(|q| self.nearest_k(q, k)).collect()
    }

    pub fn range_batch(&self, rects: &[Rect]) -> Vec<Vec<Point>> {
        rects.par_iter().map(|r| self.range(r)).collect()
    }
}
