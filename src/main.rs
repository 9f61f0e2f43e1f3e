use etch_grid::gui;
use log::info;

fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Etch grid starting up");

    gui::run_gui()
}
