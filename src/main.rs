//! Inventory Frontend Entry Point

mod app;
mod browser;
mod chart;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("Inventaris", tracing::Level::DEBUG) {
        web_sys::console::warn_1(&e.to_string().into());
    }
    mount_to_body(App);
}
