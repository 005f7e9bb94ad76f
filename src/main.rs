// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod api;
mod app;
mod config;
mod file;
mod jobs;
mod state;
mod ui;
mod utils;

use app::RadarApp;
use config::Settings;

fn main() -> Result<()> {
    // Console is the only diagnostic sink.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("review_radar=info")),
        )
        .init();

    let settings = Settings::from_env();
    tracing::info!(api_url = %settings.api_url, "starting Review Radar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("Review Radar"),
        ..Default::default()
    };

    let app = RadarApp::new(settings)?;
    eframe::run_native("Review Radar", options, Box::new(|_cc| Box::new(app)))
        .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
