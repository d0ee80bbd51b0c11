//! # client
//!
//! Leptos + WASM frontend for the chessboard memorization trainer.
//!
//! The quiz itself lives in the `quiz` crate; this crate only holds it in a
//! reactive signal, forwards button/input events to it, and draws the board
//! from its snapshots. The `ssr` feature renders the shell on the server, and
//! the `hydrate` feature attaches interactivity in the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs panic/log hooks and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
