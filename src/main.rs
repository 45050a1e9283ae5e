// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod comparison;
mod config;
mod error;
mod file;
mod state;
mod ui;

use app::CatalogApp;
use config::Settings;

fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    init_logging(&settings.log_level);
    if let Some(e) = settings_error {
        tracing::warn!(error = %format!("{:#}", e), "Invalid settings, using defaults");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Notebook Compare"),
        ..Default::default()
    };

    eframe::run_native(
        "Notebook Compare",
        options,
        Box::new(move |cc| Box::new(CatalogApp::new(cc, settings))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

// RUST_LOG wins over the configured level
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
