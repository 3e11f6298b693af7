use thiserror::Error;

/// Errors reported when a tree cannot be built from the given input or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdTreeError {
    #[error("max_leaf_size must be at least 1, got {0}")]
    InvalidLeafSize(usize),

    #[error("max_samples must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("points must have at least one dimension")]
    ZeroDimension,

    #[error("too many points for a single tree: {0}")]
    TooManyPoints(usize),

    #[error("point {index} has a non-finite coordinate on axis {axis}")]
    NonFiniteCoordinate { index: usize, axis: usize },

    #[error("coordinate buffer of length {len} is not a multiple of dimension {dim}")]
    DimensionMismatch { len: usize, dim: usize },
}

pub type Result<T> = std::result::Result<T, KdTreeError>;
