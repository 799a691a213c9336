//! # hostpanel-console
//!
//! Leptos + WASM administrative console for the Hostpanel VPS / IP-pool
//! management platform. The interesting machinery is the session gate:
//! a single HTTP gateway that attaches the bearer token and classifies every
//! failure (`net::gateway`), the persisted session store it reads from
//! (`state::session`), and the navigation guard that enforces role-based
//! route access (`routes`).

pub mod app;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
