// GUI main entry point using Dioxus
#![allow(non_snake_case)]

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::prelude::*;

mod app;
mod components;
mod config;
mod services;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    tracing::info!("Starting used car price calculator...");

    // Window geometry comes from the embedded config. The app root loads
    // the same config again to bootstrap the engine; both reads hit the
    // embedded asset, so they cannot disagree.
    let app_config = AppConfig::load_or_default();

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.window.title.clone())
            .with_inner_size(LogicalSize::new(
                app_config.window.width,
                app_config.window.height,
            )),
    );

    LaunchBuilder::desktop().with_cfg(desktop_config).launch(App);
}
