//! Gapsi Providers Admin - Dioxus Web Application
//!
//! Browser frontend for the e-Commerce Gapsi providers catalog. It talks to
//! the providers REST backend for all data.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod api;
mod app;
mod components;
mod pages;
mod routes;
mod store;
mod types;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Bake a backend URL override into browser builds, where no runtime
    // environment exists
    if let Some(url) = option_env!("API_URL") {
        api::init_api_url(url.to_string());
    }

    // Launch the Dioxus app
    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
