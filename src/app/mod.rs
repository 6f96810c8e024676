//! Application bootstrap.

pub mod window;

use anyhow::Result;
use gpui::Application;
use gpui_component::theme::{Theme, ThemeMode};
use std::path::PathBuf;
use tracing::{error, info};

use crate::assets::CombinedAssets;
use crate::config::resolve_pages;
use crate::ui;

/// Initialize the tracing subscriber for logging.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log from zsettings crate at info level
    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zsettings=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Open the settings window and run until it is closed.
pub fn run(pages_path: Option<PathBuf>) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting zsettings");

    crate::config::init_config();

    let pages = resolve_pages(pages_path.as_deref())?;
    info!(count = pages.len(), root = %pages.root().id, "Loaded pages");

    Application::new()
        .with_assets(CombinedAssets)
        .run(move |cx| {
            gpui_component::init(cx);
            ui::init(cx);
            Theme::change(ThemeMode::Dark, None, cx);

            if let Err(e) = window::open_settings_window(pages, cx) {
                error!(%e, "Failed to open settings window");
                cx.quit();
            }
        });

    Ok(())
}
