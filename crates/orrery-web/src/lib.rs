//! WASM bridge for the orbit visualizer.
//!
//! Exposes two entry points to the page: `init_app` (call once on load) and
//! `run_simulation` (bound to the start button, also callable from JS). All
//! playback state lives in thread-local storage inside [`app`].

pub mod api;
pub mod app;
pub mod canvas;

use wasm_bindgen::prelude::*;

/// `api_base` overrides the default service address
/// (`http://127.0.0.1:8000`).
#[wasm_bindgen]
pub fn init_app(api_base: Option<String>) -> Result<(), JsValue> {
    app::init(api_base)
}

#[wasm_bindgen]
pub fn run_simulation() {
    app::run_simulation();
}
