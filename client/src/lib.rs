//! # client
//!
//! Leptos frontend for the WorkFlow Pro HR dashboard.
//!
//! This crate contains the root app, pages, components, and the reactive
//! wrappers around the `roster` collaborators. Rendering happens on the server
//! first (`ssr`) and is hydrated in the browser (`hydrate`).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: installs browser logging and hydrates the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
