pub mod d2;
pub mod d3;
pub mod utils;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_rayon::init_thread_pool;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn init_threads(n: usize) -> js_sys::Promise {
    init_thread_pool(n)
}

#[wasm_bindgen(typescript_custom_section)]
const TS_CONSTANTS_TREE: &'static str = r#"
export const DEFAULT_MAX_LEAF_SIZE = 5;
export const DEFAULT_SEED = 2463534242;
"#;
