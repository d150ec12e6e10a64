//! # cruddur-client
//!
//! Leptos + WASM frontend for the Cruddur micro-blogging application.
//! The crate centers on a declarative route table (`routes`) and a
//! one-time configuration of the Cognito authentication collaborator
//! (`auth`); pages, shared components, session state, and REST helpers
//! hang off those two cores.

pub mod app;
pub mod auth;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;

/// Browser entry point: installs panic/log hooks and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
