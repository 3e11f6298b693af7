use crate::bounds::BoundingBox;
use crate::config::KdTreeConfig;
use crate::error::{KdTreeError, Result};
use crate::point::KdPoint;

mod build;
mod query;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum KdNode {
    Split {
        axis: usize,
        boundary: f64,
        left: u32,
        right: u32,
    },
    // Leaf data: points[start..end]
    Leaf {
        start: u32,
        end: u32,
    },
}

/// A static k-d tree over a fixed set of points in `D` dimensions.
///
/// The tree is built once from a point collection and is immutable afterwards.
/// Nodes live in a flat arena and leaves reference ranges of an internal,
/// reordered copy of the input points, so dropping the tree never recurses.
///
/// Every split sits on a sampled median along the axis `depth % D`. Points left
/// of a split have a coordinate `<= boundary`, points right of it `>= boundary`.
/// Sampling is seeded, so the same input and configuration always yield the
/// same tree.
#[derive(Clone, Debug)]
pub struct KdTree<P, const D: usize> {
    nodes: Vec<KdNode>,
    points: Vec<P>,
    config: KdTreeConfig,
}

impl<P: KdPoint<D>, const D: usize> KdTree<P, D> {
    /// Builds a tree with the default configuration.
    pub fn new(points: Vec<P>) -> Self {
        Self::with_config(points, KdTreeConfig::default())
    }

    /// Builds a tree with the given configuration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid, `D == 0` or a coordinate is NaN or
    /// infinite. Use
    /// [`KdTree::try_with_config`] to get the error instead.
    pub fn with_config(points: Vec<P>, config: KdTreeConfig) -> Self {
        match Self::try_with_config(points, config) {
            Ok(tree) => tree,
            Err(e) => panic!("invalid kd-tree input: {}", e),
        }
    }

    pub fn try_with_config(points: Vec<P>, config: KdTreeConfig) -> Result<Self> {
        config.validate()?;
        if D == 0 {
            return Err(KdTreeError::ZeroDimension);
        }
        if points.len() > u32::MAX as usize {
            return Err(KdTreeError::TooManyPoints(points.len()));
        }
        // A NaN or infinite boundary would hide finite points from every query.
        for (index, point) in points.iter().enumerate() {
            if let Some(axis) = (0..D).find(|&axis| !point.coordinate(axis).is_finite()) {
                return Err(KdTreeError::NonFiniteCoordinate { index, axis });
            }
        }

        let mut tree = KdTree {
            nodes: Vec::new(),
            points,
            config,
        };
        tree.build();
        Ok(tree)
    }
}

impl<P, const D: usize> KdTree<P, D> {
    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The indexed points in leaf order (not input order).
    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn config(&self) -> &KdTreeConfig {
        &self.config
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, KdNode::Leaf { .. }))
            .count()
    }

    /// Length of the longest root-to-leaf path. A tree that is a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.depth_recursive(self.root_index())
    }

    fn depth_recursive(&self, node_idx: u32) -> usize {
        match self.nodes[node_idx as usize] {
            KdNode::Split { left, right, .. } => {
                1 + self.depth_recursive(left).max(self.depth_recursive(right))
            }
            KdNode::Leaf { .. } => 0,
        }
    }

    /// The root node. An empty tree has a root leaf without points.
    pub fn root(&self) -> Node<'_, P, D> {
        self.node(self.root_index())
    }

    // Root is the last node pushed by the recursive build.
    fn root_index(&self) -> u32 {
        (self.nodes.len() - 1) as u32
    }

    fn node(&self, node_idx: u32) -> Node<'_, P, D> {
        match self.nodes[node_idx as usize] {
            KdNode::Split {
                axis,
                boundary,
                left,
                right,
            } => Node::Split(Split {
                tree: self,
                axis,
                boundary,
                left,
                right,
            }),
            KdNode::Leaf { start, end } => Node::Leaf(&self.points[start as usize..end as usize]),
        }
    }

    /// Visits every node depth first, together with the region of space it covers
    /// inside `bounds` and its depth.
    ///
    /// A split is visited before its children, left before right. Regions are
    /// obtained by cutting `bounds` at each boundary on the way down, which is what a
    /// host needs to draw the partition.
    pub fn walk<'a, F>(&'a self, bounds: BoundingBox<D>, mut visitor: F)
    where
        F: FnMut(Node<'a, P, D>, &BoundingBox<D>, usize),
    {
        self.walk_recursive(self.root_index(), bounds, 0, &mut visitor);
    }

    fn walk_recursive<'a, F>(&'a self, node_idx: u32, bounds: BoundingBox<D>, depth: usize, visitor: &mut F)
    where
        F: FnMut(Node<'a, P, D>, &BoundingBox<D>, usize),
    {
        let node = self.node(node_idx);
        visitor(node, &bounds, depth);

        if let KdNode::Split {
            axis,
            boundary,
            left,
            right,
        } = self.nodes[node_idx as usize]
        {
            let (lower, upper) = bounds.split(axis, boundary);
            self.walk_recursive(left, lower, depth + 1, visitor);
            self.walk_recursive(right, upper, depth + 1, visitor);
        }
    }
}

/// Read-only view of a tree node.
pub enum Node<'a, P, const D: usize> {
    Split(Split<'a, P, D>),
    /// A bucket of at most `max_leaf_size` points.
    Leaf(&'a [P]),
}

impl<'a, P, const D: usize> Node<'a, P, D> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Points of a leaf, `None` for a split.
    pub fn points(&self) -> Option<&'a [P]> {
        match *self {
            Node::Leaf(points) => Some(points),
            Node::Split(_) => None,
        }
    }

    pub fn as_split(&self) -> Option<&Split<'a, P, D>> {
        match self {
            Node::Split(split) => Some(split),
            Node::Leaf(_) => None,
        }
    }
}

impl<P, const D: usize> Clone for Node<'_, P, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, const D: usize> Copy for Node<'_, P, D> {}

/// An internal node splitting space with the hyperplane `x[axis] = boundary`.
pub struct Split<'a, P, const D: usize> {
    tree: &'a KdTree<P, D>,
    axis: usize,
    boundary: f64,
    left: u32,
    right: u32,
}

impl<'a, P, const D: usize> Split<'a, P, D> {
    pub fn axis(&self) -> usize {
        self.axis
    }

    pub fn boundary(&self) -> f64 {
        self.boundary
    }

    /// Subtree with coordinates `<= boundary` along the axis.
    pub fn left(&self) -> Node<'a, P, D> {
        self.tree.node(self.left)
    }

    /// Subtree with coordinates `>= boundary` along the axis.
    pub fn right(&self) -> Node<'a, P, D> {
        self.tree.node(self.right)
    }
}

impl<P, const D: usize> Clone for Split<'_, P, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, const D: usize> Copy for Split<'_, P, D> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_has_empty_root_leaf() {
        let tree: KdTree<[f64; 2], 2> = KdTree::new(Vec::new());
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.root().points().map(|p| p.len()), Some(0));
    }

    #[test]
    fn test_walk_regions_nest() {
        let points: Vec<[f64; 2]> = (0..64).map(|i| [(i % 8) as f64, (i / 8) as f64]).collect();
        let tree: KdTree<[f64; 2], 2> = KdTree::with_config(points, KdTreeConfig::default().with_max_leaf_size(2));
        let bounds = BoundingBox::new([0.0, 0.0], [7.0, 7.0]);

        let mut visited = 0;
        let mut leaf_points = 0;
        tree.walk(bounds, |node, region, depth| {
            visited += 1;
            if depth == 0 {
                assert_eq!(*region, bounds);
            }
            match node {
                Node::Split(split) => {
                    assert_eq!(split.axis(), depth % 2);
                    assert!(split.boundary() >= region.min[split.axis()]);
                    assert!(split.boundary() <= region.max[split.axis()]);
                }
                Node::Leaf(points) => {
                    leaf_points += points.len();
                    for p in points {
                        assert!(region.contains(p), "{:?} outside {:?}", p, region);
                    }
                }
            }
        });

        assert_eq!(visited, tree.node_count());
        assert_eq!(leaf_points, 64);
    }

    #[test]
    #[should_panic(expected = "max_leaf_size")]
    fn test_zero_leaf_size_panics() {
        let _ = KdTree::<[f64; 3], 3>::with_config(vec![[0.0; 3]], KdTreeConfig::default().with_max_leaf_size(0));
    }

    #[test]
    fn test_non_finite_coordinates_rejected() {
        let mut points: Vec<[f64; 2]> = (0..30).map(|i| [f64::NAN, i as f64]).collect();
        points.extend((0..10).map(|i| [0.1 * i as f64, 0.0]));
        let config = KdTreeConfig::default().with_max_leaf_size(1);

        let result = KdTree::<[f64; 2], 2>::try_with_config(points.clone(), config);
        assert_eq!(result.err(), Some(KdTreeError::NonFiniteCoordinate { index: 0, axis: 0 }));

        let finite: Vec<[f64; 2]> = points.into_iter().filter(|p| p[0].is_finite()).collect();
        let tree = KdTree::<[f64; 2], 2>::with_config(finite, config);
        assert_eq!(tree.count_within(&[0.0f64, 0.0], 5.0), 10);

        let result = KdTree::<[f64; 3], 3>::try_with_config(vec![[0.0; 3], [1.0, 2.0, f64::NEG_INFINITY]], config);
        assert_eq!(result.err(), Some(KdTreeError::NonFiniteCoordinate { index: 1, axis: 2 }));
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn test_nan_coordinate_panics() {
        let _ = KdTree::<[f64; 1], 1>::new(vec![[1.0], [f64::NAN]]);
    }

    #[test]
    fn test_try_with_config_reports_error() {
        let result = KdTree::<[f64; 1], 1>::try_with_config(vec![[1.0]], KdTreeConfig::default().with_max_samples(0));
        assert_eq!(result.err(), Some(KdTreeError::InvalidSampleCount(0)));
    }
}
