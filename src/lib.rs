//! # regret-client
//!
//! Leptos + WASM front-end for the regret board: register, log in, pick a
//! tone and post short regrets to a shared feed.
//!
//! All behaviour lives in plain Rust behind three seams (`Transport`,
//! `TokenStore`, `Surface`) and is driven by [`controller::Controller`]. The
//! browser implementations of those seams are only compiled with the `csr`
//! feature; native builds (tests, the CLI) plug in their own.

pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
mod test_support;

/// WASM entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger not installed: {err}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
