use crate::bounds::BoundingBox;
use crate::config::KdTreeConfig;
use crate::kdtree::KdTree;
use crate::rng::{Xorshift32, random_points};
use crate::wasm::utils::{flatten_points, get_seed, parse_points, query_with_callback, split_geometry, to_js_error};
use js_sys::Function;
use rayon::prelude::*;
use wasm_bindgen::prelude::*;

// --- Bounding Box ---

#[wasm_bindgen]
#[derive(Clone, Copy, Debug)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

#[wasm_bindgen]
impl BoundingBox2D {
    #[wasm_bindgen(constructor)]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox2D {
        BoundingBox2D { min_x, min_y, max_x, max_y }
    }
}

impl From<BoundingBox2D> for BoundingBox<2> {
    fn from(b: BoundingBox2D) -> Self {
        Self { min: [b.min_x, b.min_y], max: [b.max_x, b.max_y] }
    }
}

// --- Tree ---

#[wasm_bindgen(js_name = KdTree2D)]
pub struct KdTree2D {
    inner: KdTree<[f64; 2], 2>,
}

#[wasm_bindgen(js_class = KdTree2D)]
impl KdTree2D {
    /// Builds a tree from a flat `[x0, y0, x1, y1, ...]` buffer.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], max_leaf_size: Option<usize>, seed: Option<u32>) -> Result<KdTree2D, JsValue> {
        let mut config = KdTreeConfig::default();
        if let Some(n) = max_leaf_size { config = config.with_max_leaf_size(n); }
        if let Some(s) = seed { config = config.with_seed(s); }
        let points = parse_points::<2>(points).map_err(to_js_error)?;
        let inner = KdTree::try_with_config(points, config).map_err(to_js_error)?;
        Ok(KdTree2D { inner })
    }

    #[wasm_bindgen(js_name = randomPoints)]
    pub fn random_points(bounds: BoundingBox2D, count: usize, seed: Option<u32>) -> Vec<f64> {
        let mut rng = Xorshift32::new(seed.unwrap_or_else(get_seed));
        let bounds: BoundingBox<2> = bounds.into();
        let points = random_points(&mut rng, &bounds, count);
        flatten_points(&points)
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize { self.inner.len() }
    #[wasm_bindgen(getter)]
    pub fn count_nodes(&self) -> usize { self.inner.node_count() }
    #[wasm_bindgen(getter)]
    pub fn depth(&self) -> usize { self.inner.depth() }
    #[wasm_bindgen(getter)]
    pub fn points(&self) -> Vec<f64> { flatten_points(self.inner.points()) }

    /// Points strictly within `radius` of `(x, y)` as a flat buffer.
    pub fn query(&self, x: f64, y: f64, radius: f64) -> Vec<f64> {
        flatten_points(self.inner.within(&[x, y], radius))
    }

    pub fn count_within(&self, x: f64, y: f64, radius: f64) -> usize {
        self.inner.count_within(&[x, y], radius)
    }

    #[wasm_bindgen(js_name = queryWith)]
    pub fn query_with(&self, x: f64, y: f64, radius: f64, callback: &Function) -> Result<(), JsValue> {
        query_with_callback(&self.inner, &[x, y], radius, callback)
    }

    /// Number of points within `radius` of each origin in a flat `[x0, y0, ...]`
    /// buffer, computed in parallel.
    pub fn count_within_many(&self, origins: &[f64], radius: f64) -> Result<Vec<u32>, JsValue> {
        let origins = parse_points::<2>(origins).map_err(to_js_error)?;
        Ok(origins
            .par_iter()
            .map(|o| self.inner.count_within(o, radius) as u32)
            .collect())
    }

    /// Split lines clipped to `bounds`, four values `(x0, y0, x1, y1)` per split.
    pub fn split_lines(&self, bounds: BoundingBox2D) -> Vec<f64> {
        split_geometry(&self.inner, bounds.into())
    }
}
