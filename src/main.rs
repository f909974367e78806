//! Beer Catalog Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod ident;
mod render;
mod catalog;
mod api;
mod controller;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = AppConfig::from_document();
    log::set_max_level(config.log_level);
    log::info!("using backend {}", config.api_base);

    mount_to_body(move || view! { <App config=config /> });
}
