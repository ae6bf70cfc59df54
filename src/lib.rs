#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Personal portfolio page compiled to WebAssembly.
//!
//! Page state, content, markup and the particle simulation are plain Rust and
//! build on any target. Only the `wasm` module touches the browser.

pub mod animation;
pub mod api;
pub mod app;
pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod state;

// Only compile browser bindings when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    pub mod canvas;
    pub mod http;
    pub mod page;
    pub mod storage;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let config = crate::config::SiteConfig::from_build_env();
        crate::logging::init(config.log_level);
        page::mount(config)
    }

    /// Tears the page down: removes every listener and stops the animation loop.
    #[wasm_bindgen]
    pub fn shutdown() {
        page::unmount();
    }
}
