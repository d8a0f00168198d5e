//! # client
//!
//! Leptos + WASM front end for the ReservaFácil reservation manager.
//!
//! This crate contains pages, components, application state, and the
//! browser transport for the `gateway` crate. Build it with the `csr`
//! feature (e.g. `trunk serve --features csr`); without it the crate
//! compiles natively so state and helpers can be unit tested.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
