use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::{Config, DEFAULT_DATA};
use launch_dash::data::loader;

fn main() -> eframe::Result {
    env_logger::init();

    let data_path = match Config::from_env() {
        Ok(config) => config.data_path,
        Err(e) => {
            log::warn!("{e}; falling back to {DEFAULT_DATA}");
            PathBuf::from(DEFAULT_DATA)
        }
    };

    // Unlike the server, a missing file is not fatal here: the viewer
    // starts empty and File → Open… picks another dataset.
    let (dataset, status) = match loader::load_file(&data_path) {
        Ok(ds) => {
            log::info!("Loaded {} launches from {}", ds.len(), data_path.display());
            (Some(Arc::new(ds)), None)
        }
        Err(e) => {
            log::error!("Failed to load {}: {e}", data_path.display());
            (None, Some(format!("Error: {e}")))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(dataset, status)))),
    )
}
