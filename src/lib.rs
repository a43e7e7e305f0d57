//! # estate-analyzer-client
//!
//! Leptos + WASM frontend for the RealEstate Analyzer chatbot. Replaces the
//! React + Chart.js client with a Rust-native UI layer.
//!
//! This crate contains pages, presentation components, application state,
//! and the HTTP API client for the analytics backend. The backend itself is
//! an external service consumed over `/api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point called by the generated wasm module.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
