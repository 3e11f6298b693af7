use super::{KdNode, KdTree};
use crate::config::Sampling;
use crate::point::KdPoint;
use crate::rng::Xorshift32;
use log::{debug, trace};

impl<P: KdPoint<D>, const D: usize> KdTree<P, D> {
    pub(super) fn build(&mut self) {
        let count = self.points.len();
        self.nodes.clear();

        // Every split leaves both sides non-empty, so there are fewer than
        // 2 * count nodes. Leaves usually hold several points.
        self.nodes.reserve(2 * count / self.config.max_leaf_size + 1);

        // One generator per build, shared by every split.
        let mut rng = Xorshift32::new(self.config.seed);
        let mut samples = Vec::with_capacity(self.config.max_samples);

        self.build_recursive(0, count, 0, &mut rng, &mut samples);

        debug!(
            "kd-tree built: {} points, {} nodes, {} leaves, depth {}",
            count,
            self.nodes.len(),
            self.leaf_count(),
            self.depth()
        );
    }

    fn build_recursive(
        &mut self,
        start: usize,
        end: usize,
        depth: usize,
        rng: &mut Xorshift32,
        samples: &mut Vec<f64>,
    ) -> u32 {
        let count = end - start;

        // Leaf condition: small number of points
        if count <= self.config.max_leaf_size {
            return self.push_node(KdNode::Leaf {
                start: start as u32,
                end: end as u32,
            });
        }

        let axis = depth % D;
        let range = &mut self.points[start..end];
        let boundary = sample_median(range, axis, self.config.max_samples, self.config.sampling, rng, samples);
        let mid = start + partition(range, axis, boundary);

        let left = self.build_recursive(start, mid, depth + 1, rng, samples);
        let right = self.build_recursive(mid, end, depth + 1, rng, samples);

        self.push_node(KdNode::Split {
            axis,
            boundary,
            left,
            right,
        })
    }

    fn push_node(&mut self, node: KdNode) -> u32 {
        let node_idx = self.nodes.len() as u32;
        self.nodes.push(node);
        node_idx
    }
}

/// Estimates the median coordinate of `points` along `axis` from a few random samples.
///
/// Draws `min(points.len(), max_samples)` points with replacement and returns the
/// lower median of their coordinates. The result is always the coordinate of one
/// of the points. With [`Sampling::Leading`] only the first `sample_count` points
/// can be drawn.
fn sample_median<P: KdPoint<D>, const D: usize>(
    points: &[P],
    axis: usize,
    max_samples: usize,
    sampling: Sampling,
    rng: &mut Xorshift32,
    samples: &mut Vec<f64>,
) -> f64 {
    let sample_count = points.len().min(max_samples);
    let span = match sampling {
        Sampling::WholeRange => points.len(),
        Sampling::Leading => sample_count,
    };
    samples.clear();
    for _ in 0..sample_count {
        let idx = rng.next_u31() as usize % span;
        samples.push(points[idx].coordinate(axis));
    }

    let (_, median, _) = samples.select_nth_unstable_by((sample_count - 1) / 2, f64::total_cmp);
    *median
}

/// Reorders `points` in place around `boundary` along `axis` and returns the
/// length of the left part.
///
/// The left part holds every point with a coordinate `< boundary` and the right
/// part the rest. When no point lies below the boundary, the points equal to it
/// are moved to the left instead, and when all points are equal the range is
/// halved. For two or more points both parts are therefore never empty, every
/// left point is `<= boundary` and every right point is `>= boundary`, provided
/// `boundary` is the coordinate of one of the points.
pub(crate) fn partition<P: KdPoint<D>, const D: usize>(points: &mut [P], axis: usize, boundary: f64) -> usize {
    let len = points.len();
    let mid = partition_by(points, |p| p.coordinate(axis) < boundary);
    if mid > 0 && mid < len {
        return mid;
    }

    let equal = if mid == 0 {
        partition_by(points, |p| p.coordinate(axis) <= boundary)
    } else {
        0
    };
    let forced = if equal > 0 && equal < len { equal } else { len / 2 };
    trace!(
        "forced split of {} points on axis {} at {}: {} left",
        len, axis, boundary, forced
    );
    forced
}

// Two cursors walk towards each other, exchanging misplaced points, until they cross.
fn partition_by<P, F>(points: &mut [P], mut is_left: F) -> usize
where
    F: FnMut(&P) -> bool,
{
    let mut lo = 0;
    let mut hi = points.len();
    loop {
        while lo < hi && is_left(&points[lo]) {
            lo += 1;
        }
        while lo < hi && !is_left(&points[hi - 1]) {
            hi -= 1;
        }
        if lo >= hi {
            return lo;
        }
        points.swap(lo, hi - 1);
        lo += 1;
        hi -= 1;
    }
}
