//! Verdra marketing site
//!
//! A Leptos site rendered on the server with axum and hydrated in the
//! browser when built with the `hydrate` feature.

pub mod api;
pub mod app;
pub mod components;
#[cfg(feature = "ssr")]
pub mod fileserv;
pub mod pages;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    leptos::mount_to_body(app::App);
}
