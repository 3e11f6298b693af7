use super::{KdNode, KdTree};
use crate::point::{KdPoint, squared_distance};
use rayon::prelude::*;

impl<P: KdPoint<D>, const D: usize> KdTree<P, D> {
    /// Calls `visit` for every point strictly closer than `radius` to `origin`.
    ///
    /// A point at exactly `radius` is not reported, so a radius of zero (or any
    /// non-positive or NaN radius) reports nothing. Points come in leaf order,
    /// not sorted by distance.
    pub fn query<'a, O, F>(&'a self, origin: &O, radius: f64, mut visit: F)
    where
        O: KdPoint<D> + ?Sized,
        F: FnMut(&'a P),
    {
        if !(radius > 0.0) {
            return;
        }
        let origin = origin.to_array();
        self.query_recursive(self.root_index(), &origin, radius, radius * radius, &mut visit);
    }

    fn query_recursive<'a, F>(&'a self, node_idx: u32, origin: &[f64; D], radius: f64, radius_sq: f64, visit: &mut F)
    where
        F: FnMut(&'a P),
    {
        match self.nodes[node_idx as usize] {
            KdNode::Split {
                axis,
                boundary,
                left,
                right,
            } => {
                // Skip a side only when the ball lies entirely beyond the boundary.
                let d = origin[axis] - boundary;
                if d < radius {
                    self.query_recursive(left, origin, radius, radius_sq, visit);
                }
                if -d < radius {
                    self.query_recursive(right, origin, radius, radius_sq, visit);
                }
            }
            KdNode::Leaf { start, end } => {
                for point in &self.points[start as usize..end as usize] {
                    if squared_distance(point, origin) < radius_sq {
                        visit(point);
                    }
                }
            }
        }
    }

    /// Collects the points strictly within `radius` of `origin`.
    pub fn within<O: KdPoint<D> + ?Sized>(&self, origin: &O, radius: f64) -> Vec<&P> {
        let mut hits = Vec::new();
        self.query(origin, radius, |p| hits.push(p));
        hits
    }

    /// Counts the points strictly within `radius` of `origin`.
    pub fn count_within<O: KdPoint<D> + ?Sized>(&self, origin: &O, radius: f64) -> usize {
        let mut count = 0;
        self.query(origin, radius, |_| count += 1);
        count
    }

    /// Runs [`KdTree::within`] for every origin in parallel.
    ///
    /// The result holds one list of hits per origin, in the order of `origins`.
    pub fn within_many<O>(&self, origins: &[O], radius: f64) -> Vec<Vec<&P>>
    where
        O: KdPoint<D> + Sync,
        P: Sync,
    {
        origins
            .par_iter()
            .map(|origin| self.within(origin, radius))
            .collect()
    }
}
