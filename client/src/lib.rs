//! # chapterchat-client
//!
//! Leptos + WASM chat widget for asking questions about one textbook chapter.
//!
//! The user walks a board, class, subject and chapter selector, submits the
//! resulting storage path for processing, then asks questions that are
//! answered against that chapter. Questions asked in this tab are listed in a
//! day-grouped sidebar.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
