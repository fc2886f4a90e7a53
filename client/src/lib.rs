//! # client
//!
//! Leptos + WASM frontend for the MindfulAI companion app.
//!
//! This crate contains pages, components, application state, the session
//! store, and the chat API helpers. The root `mindful` server renders it
//! with `leptos_axum` (feature `ssr`); the browser hydrates it (feature
//! `hydrate`).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating MindfulAI client");
    leptos::mount::hydrate_body(app::App);
}
