//! # client
//!
//! Leptos + WASM frontend for the Paul chat assistant.
//!
//! This crate contains the chat page, its components, the transcript state
//! and the HTTP helpers for `/query`, `/reset` and `/history/{id}`. The
//! `server` crate renders it with the `ssr` feature; the browser bundle is
//! built with `hydrate`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
