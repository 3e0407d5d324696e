//! # client
//!
//! Leptos + WASM frontend for the recovery journal.
//!
//! Pages sit behind a route guard driven by the session status the host
//! resolves from the external identity provider. The `ssr` feature renders the
//! same tree on the server; `hydrate` attaches it in the browser.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("hydrating recovery journal");
    leptos::mount::hydrate_body(app::App);
}
