//! Jot Desktop Application
//!
//! A small local-first notes window: write a note, see it at the top of the
//! list, delete it when done.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = config::app_config();

    // RUST_LOG wins over the configured default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting Jot...");
    tracing::info!("Notes are stored in {}", config.data_dir.display());
    tracing::debug!("Initial theme: {}", config.theme);

    let window = WindowBuilder::new()
        .with_title("Notes")
        .with_inner_size(LogicalSize::new(760.0, 820.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
