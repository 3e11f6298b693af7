//! # kdrange
//!
//! `kdrange` is a Rust library for radius queries over a fixed set of points in
//! D-dimensional space, designed to be used in Rust as well as compiled to
//! WebAssembly (WASM). The index is built once and then queried repeatedly for
//! all points lying within a given radius of an arbitrary origin.
//!
//! ## Features
//!
//! - **Randomized Median Splits**: Each split is placed on the median of a small random sample,
//!   along an axis that rotates with depth. Sampling is seeded and reproducible.
//! - **Pruned Range Queries**: Whole subtrees are skipped when the query ball lies beyond a split.
//! - **Structural Access**: Splits and leaves can be walked together with their regions for drawing.
//! - **WASM-first**: 2D and 3D bindings built with `wasm-bindgen`, batch queries run on `rayon`.
//!
//! ## Example
//!
//! ```
//! use kdrange::KdTree;
//!
//! let tree: KdTree<[f64; 2], 2> = KdTree::new(vec![[0.0, 0.0], [1.0, 0.0], [5.0, 5.0]]);
//! let hits = tree.within(&[0.0f64, 0.0], 1.5);
//! assert_eq!(hits.len(), 2);
//! ```
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct, configured through [`KdTreeConfig`].

mod bounds;
mod config;
mod error;
mod index;
mod kdtree;
mod point;
mod rng;
pub mod wasm;

pub use bounds::BoundingBox;
pub use config::KdTreeConfig;
pub use config::DEFAULT_MAX_LEAF_SIZE;
pub use config::DEFAULT_MAX_SAMPLES;
pub use config::Sampling;
pub use error::KdTreeError;
pub use index::LinearScan;
pub use index::RangeIndex;
pub use kdtree::KdTree;
pub use kdtree::Node;
pub use kdtree::Split;
pub use point::KdPoint;
pub use point::squared_distance;
pub use rng::Xorshift32;
pub use rng::DEFAULT_SEED;
pub use rng::random_points;
