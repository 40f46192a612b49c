//! # appforge-web
//!
//! Leptos + WASM front-end for the AppForge code-generation service.
//!
//! This crate contains the route table and admin guard, the login-session
//! store, REST helpers for the backend, and the pages and components that
//! render them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install logging and render the app into `<body>`.
///
/// The bundle is a client-rendered SPA; `index.html` loads it and the
/// backend only serves JSON.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
