use crate::error::{KdTreeError, Result};
use crate::rng::DEFAULT_SEED;

/// Default upper bound on the number of points stored in a leaf.
pub const DEFAULT_MAX_LEAF_SIZE: usize = 5;
/// Default number of coordinates sampled to estimate a split median.
pub const DEFAULT_MAX_SAMPLES: usize = 10;

/// Where the split median samples are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// Sample indices cover the whole range being split.
    #[default]
    WholeRange,
    /// Sample indices are taken modulo the sample count, so only the first
    /// `max_samples` points of a range are ever sampled. Kept for reproducing
    /// trees of builds that sample this way; sorted input degrades to a linear
    /// depth.
    Leading,
}

/// Build parameters for a [`KdTree`](crate::KdTree).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KdTreeConfig {
    /// Ranges with at most this many points become leaves.
    pub max_leaf_size: usize,
    /// Number of random samples drawn per split to pick the boundary.
    pub max_samples: usize,
    /// Seed of the sampling generator. Equal seeds give equal trees.
    pub seed: u32,
    pub sampling: Sampling,
}

impl Default for KdTreeConfig {
    fn default() -> Self {
        Self {
            max_leaf_size: DEFAULT_MAX_LEAF_SIZE,
            max_samples: DEFAULT_MAX_SAMPLES,
            seed: DEFAULT_SEED,
            sampling: Sampling::WholeRange,
        }
    }
}

impl KdTreeConfig {
    pub fn with_max_leaf_size(mut self, max_leaf_size: usize) -> Self {
        self.max_leaf_size = max_leaf_size;
        self
    }

    pub fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_leaf_size == 0 {
            return Err(KdTreeError::InvalidLeafSize(self.max_leaf_size));
        }
        if self.max_samples == 0 {
            return Err(KdTreeError::InvalidSampleCount(self.max_samples));
        }
        Ok(())
    }
}
