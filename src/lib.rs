#![recursion_limit = "256"]

pub mod api;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod icons;
pub mod portfolio;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (e.g. after hot reload) is harmless
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
