//! Helpdesk Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod models;
mod notify;
mod sync;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Default level until the page config is read, so config warnings show up
    logging::init(log::LevelFilter::Info);
    let config = AppConfig::from_document();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
