mod app;
mod components;
mod gate;
mod job;
mod state;
mod submit;
mod unsaved;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let window_builder = WindowBuilder::new()
        .with_title("Index Management Console")
        .with_inner_size(LogicalSize::new(960.0, 680.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_menu(None).with_window(window_builder))
        .launch(app::App);
}
