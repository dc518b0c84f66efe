// main.rs - Desktop Conway's Game of Life

use eframe::egui;
use std::path::Path;
use std::time::Instant;

use conway::{GameOfLife, LifeConfig};
use conway::config::CONFIG_FILE_NAME;

mod ui;

use ui::LifeApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = LifeConfig::load_or_default(Path::new(CONFIG_FILE_NAME));
    log::info!("Conway's Game of Life starting...");
    log::info!("Grid size: {}x{}", config.width_cells, config.height_cells);
    log::info!("Tick interval: {:?}", config.tick_interval());

    let game = match GameOfLife::new(&config, Instant::now()) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Cannot create board: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(ui::window_size(&config))
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(game, &config))),
    )
}
