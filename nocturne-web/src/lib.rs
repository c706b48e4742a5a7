#![forbid(unsafe_code)]
//! Nocturne Web
//!
//! Browser layer for the Nocturne per-site dark mode: reads the allow-list
//! from `localStorage`, recolors the live DOM through `web-sys`, and keeps
//! dynamically inserted content covered with a mutation watcher. All color
//! decisions come from `nocturne-core`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod engine;
pub mod observer;
pub mod recolor;
pub mod store;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    engine::boot();
}
