//! # client
//!
//! Leptos + WASM front-end for the TutorHub tutoring marketplace.
//!
//! SYSTEM CONTEXT
//! ==============
//! All session and authorization logic lives in the `portal` crate. This
//! crate supplies the browser halves of its seams (`localStorage` and
//! `fetch`), projects session snapshots into a reactive signal, and renders
//! the public, student, tutor, and admin pages.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
