//! APC Programming Club landing page
//!
//! Single scrolling page with the event gallery and the membership form.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Club site starting, registrations go to {}", utils::constants::REGISTRATION_URL);

    leptos::mount::mount_to_body(|| view! { <App/> });
}
