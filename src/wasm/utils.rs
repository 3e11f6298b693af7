use crate::bounds::BoundingBox;
use crate::error::{KdTreeError, Result};
use crate::kdtree::{KdTree, Node};
use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

/// Splits a flat coordinate buffer `[x0, y0, x1, y1, ...]` into points.
pub fn parse_points<const D: usize>(flat: &[f64]) -> Result<Vec<[f64; D]>> {
    if D == 0 {
        return Err(KdTreeError::ZeroDimension);
    }
    if flat.len() % D != 0 {
        return Err(KdTreeError::DimensionMismatch { len: flat.len(), dim: D });
    }
    Ok(flat
        .chunks_exact(D)
        .map(|c| std::array::from_fn(|i| c[i]))
        .collect())
}

pub fn flatten_points<'a, const D: usize>(points: impl IntoIterator<Item = &'a [f64; D]>) -> Vec<f64> {
    points.into_iter().flat_map(|p| p.iter().copied()).collect()
}

pub fn to_js_error(e: KdTreeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Flat geometry of every split hyperplane clipped to its node region.
///
/// Each split contributes `2 * D` values: the lower corner followed by the upper
/// corner of the clipped hyperplane. In 2D these are the line segments of the
/// partition, in 3D the axis-aligned rectangles.
pub fn split_geometry<const D: usize>(tree: &KdTree<[f64; D], D>, bounds: BoundingBox<D>) -> Vec<f64> {
    let mut out = Vec::new();
    tree.walk(bounds, |node, region, _| {
        if let Node::Split(split) = node {
            let axis = split.axis();
            let b = split.boundary().clamp(region.min[axis], region.max[axis]);
            let mut lower = region.min;
            let mut upper = region.max;
            lower[axis] = b;
            upper[axis] = b;
            out.extend_from_slice(&lower);
            out.extend_from_slice(&upper);
        }
    });
    out
}

/// Calls a JavaScript callback with each point as an array of coordinates.
///
/// Stops calling after the first exception and returns it.
pub fn query_with_callback<const D: usize>(
    tree: &KdTree<[f64; D], D>,
    origin: &[f64; D],
    radius: f64,
    callback: &Function,
) -> std::result::Result<(), JsValue> {
    let mut error = None;
    tree.query(origin, radius, |p| {
        if error.is_some() {
            return;
        }
        let arr: Array = p.iter().map(|&v| JsValue::from_f64(v)).collect();
        if let Err(e) = callback.call1(&JsValue::NULL, &arr) {
            error = Some(e);
        }
    });
    match error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

pub fn get_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::rng::DEFAULT_SEED
    }
}
