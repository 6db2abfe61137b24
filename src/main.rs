//! CV Forge - interactive CV editor with live preview
//!
//! A step-by-step form for building a CV, rendered live as a styled resume
//! and exportable as a print-ready page.

mod app;
mod core;
mod export;
mod ui;

use app::CvForgeApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting CV Forge...");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("CV Forge"),
        ..Default::default()
    };

    eframe::run_native(
        "CV Forge",
        native_options,
        Box::new(|cc| Ok(Box::new(CvForgeApp::new(cc)))),
    )
}
