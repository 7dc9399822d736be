//! Billing Console Web Frontend
//!
//! Leptos-based WASM frontend for the billing settings page.

mod api;
mod app;
mod components;
mod config;
mod logging;
mod pages;

pub use app::App;
pub use config::WebConfig;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = WebConfig::from_build_env();
    logging::init(&config);

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
