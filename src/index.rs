use crate::kdtree::KdTree;
use crate::point::{KdPoint, squared_distance};

/// Trait defining a radius query over a fixed point set.
/// This allows swapping the k-d tree for the brute-force scan in tests and benchmarks.
pub trait RangeIndex<P, const D: usize>: Send + Sync {
    /// Number of indexed points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visit every point strictly closer than `radius` to `origin`.
    ///
    /// # Arguments
    /// * `origin` - The query center.
    /// * `radius` - The search radius. Non-positive radii visit nothing.
    /// * `visitor` - A closure called once for each matching point, in no particular order.
    fn visit_within<'a, F>(&'a self, origin: &[f64; D], radius: f64, visitor: F)
    where
        P: 'a,
        F: FnMut(&'a P);
}

impl<P: KdPoint<D> + Send + Sync, const D: usize> RangeIndex<P, D> for KdTree<P, D> {
    fn len(&self) -> usize {
        self.points().len()
    }

    fn visit_within<'a, F>(&'a self, origin: &[f64; D], radius: f64, visitor: F)
    where
        P: 'a,
        F: FnMut(&'a P),
    {
        self.query(origin, radius, visitor);
    }
}

/// Reference index that tests every point on every query.
#[derive(Clone, Debug)]
pub struct LinearScan<P, const D: usize> {
    points: Vec<P>,
}

impl<P: KdPoint<D>, const D: usize> LinearScan<P, D> {
    pub fn new(points: Vec<P>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P: KdPoint<D> + Send + Sync, const D: usize> RangeIndex<P, D> for LinearScan<P, D> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn visit_within<'a, F>(&'a self, origin: &[f64; D], radius: f64, mut visitor: F)
    where
        P: 'a,
        F: FnMut(&'a P),
    {
        if !(radius > 0.0) {
            return;
        }
        let radius_sq = radius * radius;
        for point in &self.points {
            if squared_distance(point, origin) < radius_sq {
                visitor(point);
            }
        }
    }
}
