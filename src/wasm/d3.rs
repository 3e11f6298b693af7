use crate::bounds::BoundingBox;
use crate::config::KdTreeConfig;
use crate::kdtree::KdTree;
use crate::rng::{Xorshift32, random_points};
use crate::wasm::utils::{flatten_points, get_seed, parse_points, query_with_callback, split_geometry, to_js_error};
use js_sys::Function;
use rayon::prelude::*;
use wasm_bindgen::prelude::*;

// --- Bounding Box ---

/// Represents an axis-aligned bounding box in 3D space.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox3D {
    pub min_x: f64,
    pub min_y: f64,
    pub min_z: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub max_z: f64,
}

#[wasm_bindgen]
impl BoundingBox3D {
    #[wasm_bindgen(constructor)]
    pub fn new(
        min_x: f64,
        min_y: f64,
        min_z: f64,
        max_x: f64,
        max_y: f64,
        max_z: f64,
    ) -> BoundingBox3D {
        BoundingBox3D {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }
}

impl From<BoundingBox3D> for BoundingBox<3> {
    fn from(b: BoundingBox3D) -> Self {
        Self {
            min: [b.min_x, b.min_y, b.min_z],
            max: [b.max_x, b.max_y, b.max_z],
        }
    }
}

// --- Tree ---

/// WASM wrapper for a 3D k-d tree.
#[wasm_bindgen(js_name = KdTree3D)]
pub struct KdTree3D {
    inner: KdTree<[f64; 3], 3>,
}

#[wasm_bindgen(js_class = KdTree3D)]
impl KdTree3D {
    /// Builds a tree from a flat `[x0, y0, z0, x1, ...]` buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], max_leaf_size: Option<usize>, seed: Option<u32>) -> Result<KdTree3D, JsValue> {
        let mut config = KdTreeConfig::default();
        if let Some(n) = max_leaf_size {
            config = config.with_max_leaf_size(n);
        }
        if let Some(s) = seed {
            config = config.with_seed(s);
        }
        let points = parse_points::<3>(points).map_err(to_js_error)?;
        let inner = KdTree::try_with_config(points, config).map_err(to_js_error)?;
        Ok(KdTree3D { inner })
    }

    #[wasm_bindgen(js_name = randomPoints)]
    pub fn random_points(bounds: BoundingBox3D, count: usize, seed: Option<u32>) -> Vec<f64> {
        let mut rng = Xorshift32::new(seed.unwrap_or_else(get_seed));
        let bounds: BoundingBox<3> = bounds.into();
        let points = random_points(&mut rng, &bounds, count);
        flatten_points(&points)
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn count_nodes(&self) -> usize {
        self.inner.node_count()
    }

    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize {
        self.inner.depth()
    }

    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> {
        flatten_points(self.inner.points())
    }

    /// Points strictly within `radius` of `(x, y, z)` as a flat buffer.
    pub fn query(&self, x: f64, y: f64, z: f64, radius: f64) -> Vec<f64> {
        flatten_points(self.inner.within(&[x, y, z], radius))
    }

    pub fn count_within(&self, x: f64, y: f64, z: f64, radius: f64) -> usize {
        self.inner.count_within(&[x, y, z], radius)
    }

    /// Calls `callback([x, y, z])` for every point within `radius`.
    #[wasm_bindgen(js_name = queryWith)]
    pub fn query_with(&self, x: f64, y: f64, z: f64, radius: f64, callback: &Function) -> Result<(), JsValue> {
        query_with_callback(&self.inner, &[x, y, z], radius, callback)
    }

    /// Split planes clipped to `bounds`, six values (lower corner, upper corner) per split.
    pub fn split_planes(&self, bounds: BoundingBox3D) -> Vec<f64> {
        split_geometry(&self.inner, bounds.into())
    }

    /// Number of points within `radius` of each origin in a flat `[x0, y0, z0, ...]`
    /// buffer, computed in parallel.
    pub fn count_within_many(&self, origins: &[f64], radius: f64) -> Result<Vec<u32>, JsValue> {
        let origins = parse_points::<3>(origins).map_err(to_js_error)?;
        Ok(origins
            .par_iter()
            .map(|o| self.inner.count_within(o, radius) as u32)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_within_many_matches_count_within() {
        let flat: Vec<f64> = (0..125).flat_map(|i| [(i % 5) as f64, ((i / 5) % 5) as f64, (i / 25) as f64]).collect();
        let Ok(tree) = KdTree3D::new(&flat, Some(2), Some(7)) else {
            panic!("valid buffer rejected");
        };
        assert_eq!(tree.count_points(), 125);

        let origins = [2.0, 2.0, 2.0, 0.0, 0.0, 0.0, 9.0, 9.0, 9.0];
        let Ok(counts) = tree.count_within_many(&origins, 1.1) else {
            panic!("valid origins rejected");
        };
        // Centre plus six face neighbours, corner plus three, nothing far away.
        assert_eq!(counts, vec![7, 4, 0]);
        assert_eq!(tree.count_within(2.0, 2.0, 2.0, 1.1), 7);
    }
}
