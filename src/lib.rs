//! # finboard
//!
//! Leptos + WASM browser client for a personal-finance tracking backend:
//! authenticated dashboard views, a navigation shell, a typed REST client,
//! and a persisted client-side session store.
//!
//! The `csr` feature gates everything browser-bound — HTTP dispatch,
//! localStorage persistence, the mount entry point. Without it the crate
//! builds natively, which keeps the pure state transitions, restore
//! decisions, and encoders unit-testable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
