//! billing-link Web Frontend
//!
//! Leptos-based WASM frontend: a checkout page hosting the provider's
//! embedded card form plus an optional phone field, and a confirmation page.

mod api;
mod app;
mod components;
mod config;
mod pages;
mod stripe_js;

pub use app::App;
pub use config::{FrontendConfig, MissingConfig};

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
