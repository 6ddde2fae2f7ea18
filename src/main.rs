mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;
mod views;

use std::path::Path;

use app::FreeAgentApp;
use config::AppConfig;
use data::model::Season;
use data::store::DataStore;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(config::CONFIG_FILE));
    log::info!("Reading free agent data from {}", config.data_dir.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MLB Free Agent Analysis",
        options,
        Box::new(move |_cc| {
            let store = DataStore::new(config.data_dir, &Season::ALL);
            Ok(Box::new(FreeAgentApp::new(store)))
        }),
    )
}
